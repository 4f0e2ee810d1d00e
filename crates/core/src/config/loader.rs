//! Config path resolution
//!
//! Handles resolving paths for configuration files based on `$ARK_HOME` or
//! the location of the running executable.

use std::path::{Path, PathBuf};

use super::{ConfigError, ConfigResult};

/// Environment variable overriding the base directory
pub const BASE_DIR_ENV: &str = "ARK_HOME";

/// Returns the ark base directory.
///
/// `$ARK_HOME` when set and non-empty, otherwise the directory containing the
/// current executable.
pub fn ark_base_dir() -> ConfigResult<PathBuf> {
    if let Some(home) = std::env::var_os(BASE_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }

    let exe = std::env::current_exe().map_err(ConfigError::IoError)?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or(ConfigError::NoConfigDirectory)
}

/// Returns the configs directory.
///
/// Path: `<base>/configs/`
pub fn configs_dir() -> ConfigResult<PathBuf> {
    Ok(ark_base_dir()?.join("configs"))
}

/// Returns the core config path.
///
/// Path: `<base>/configs/core.toml`
pub fn core_config_path() -> ConfigResult<PathBuf> {
    Ok(configs_dir()?.join("core.toml"))
}
