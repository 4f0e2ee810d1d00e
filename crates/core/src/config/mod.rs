//! Configuration for the ark core
//!
//! This module provides the core configuration file:
//! - Type-safe config struct via serde
//! - TOML file format
//! - Auto-generation of a default config
//! - Manual reload capability
//!
//! # Example
//!
//! ```ignore
//! use ark_core::CoreConfig;
//!
//! let config = CoreConfig::load().unwrap_or_default();
//! ark_core::logging::init(&config)?;
//! let registry = ark_core::ClassRegistry::with_config(&config);
//! ```

mod loader;

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub use loader::{ark_base_dir, configs_dir, core_config_path, BASE_DIR_ENV};

/// Configuration system errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read or write config file
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to parse TOML content
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Failed to serialize config to TOML
    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// Could not determine the base directory
    #[error("Config directory not available - set {} or run from an installed binary", BASE_DIR_ENV)]
    NoConfigDirectory,
}

/// Result type for config operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Core configuration.
///
/// Loaded from `<base>/configs/core.toml`; see [`core_config_path`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Config version for future migration support
    pub version: u32,

    /// Enable debug logging
    pub debug: bool,

    /// Explicit log filter directive (e.g. `"ark_core=trace"`), overrides `debug`
    pub log_filter: Option<String>,

    /// Warn when a single dispatch takes longer than this many microseconds (0 disables)
    pub slow_dispatch_warn_us: u64,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            version: 1,
            debug: false,
            log_filter: None,
            slow_dispatch_warn_us: 1000,
        }
    }
}

impl CoreConfig {
    /// Slow dispatch threshold, `None` when disabled
    pub fn slow_dispatch_threshold(&self) -> Option<Duration> {
        (self.slow_dispatch_warn_us > 0).then(|| Duration::from_micros(self.slow_dispatch_warn_us))
    }

    /// Load core config from the default location, creating it if missing.
    pub fn load() -> ConfigResult<Self> {
        Self::load_from(core_config_path()?)
    }

    /// Save core config to the default location.
    pub fn save(&self) -> ConfigResult<()> {
        self.save_to(core_config_path()?)
    }

    /// Reload core config from the default location.
    pub fn reload(&mut self) -> ConfigResult<()> {
        self.reload_from(core_config_path()?)
    }

    /// Load config from `path`, creating a default file if missing.
    pub fn load_from(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();

        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Self = toml::from_str(&content)?;
            tracing::debug!("Loaded core config from {:?}", path);
            Ok(config)
        } else {
            let default = Self::default();
            default.save_to(path)?;
            tracing::info!("Created default core config at {:?}", path);
            Ok(default)
        }
    }

    /// Save config to `path`.
    ///
    /// Creates parent directories if they don't exist.
    pub fn save_to(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::debug!("Saved core config to {:?}", path);
        Ok(())
    }

    /// Reload config from `path`.
    ///
    /// Updates self with the current file contents.
    pub fn reload_from(&mut self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        *self = toml::from_str(&content)?;
        tracing::debug!("Reloaded core config from {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU64, Ordering};

    static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

    // Unique directory per test to avoid parallel test interference
    fn unique_dir() -> PathBuf {
        let n = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        std::env::temp_dir().join(format!("ark-core-config-{}-{}", std::process::id(), n))
    }

    #[test]
    fn test_core_config_default() {
        let config = CoreConfig::default();
        assert_eq!(config.version, 1);
        assert!(!config.debug);
        assert!(config.log_filter.is_none());
        assert_eq!(
            config.slow_dispatch_threshold(),
            Some(Duration::from_millis(1))
        );
    }

    #[test]
    fn test_core_config_serialize() {
        let config = CoreConfig {
            version: 2,
            debug: true,
            log_filter: Some("ark_core=trace".to_string()),
            slow_dispatch_warn_us: 0,
        };

        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("version = 2"));
        assert!(toml_str.contains("debug = true"));
        assert!(toml_str.contains("log_filter = \"ark_core=trace\""));

        let parsed: CoreConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
        assert!(parsed.slow_dispatch_threshold().is_none());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let parsed: CoreConfig = toml::from_str("debug = true").unwrap();
        assert!(parsed.debug);
        assert_eq!(parsed.version, 1);
        assert_eq!(parsed.slow_dispatch_warn_us, 1000);
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = unique_dir();
        let path = dir.join("configs").join("core.toml");

        let config = CoreConfig::load_from(&path).unwrap();
        assert_eq!(config, CoreConfig::default());
        assert!(path.exists());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_save_and_reload() {
        let dir = unique_dir();
        let path = dir.join("core.toml");

        let mut config = CoreConfig::default();
        config.save_to(&path).unwrap();

        std::fs::write(&path, "debug = true\nslow_dispatch_warn_us = 50\n").unwrap();
        config.reload_from(&path).unwrap();
        assert!(config.debug);
        assert_eq!(config.slow_dispatch_warn_us, 50);

        let loaded = CoreConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let dir = unique_dir();
        let path = dir.join("core.toml");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, "debug = \"maybe\"").unwrap();

        let err = CoreConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
