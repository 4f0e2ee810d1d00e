//! Entity identifier

use std::fmt;

/// Globally unique identifier of an entity
///
/// The entity system allocates these; the callback registry only passes
/// them through to listeners.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Guid(i64);

impl Guid {
    /// The "no entity" identifier
    pub const NULL: Guid = Guid(0);

    /// Create a GUID from its raw value
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw value
    #[inline]
    pub const fn raw(&self) -> i64 {
        self.0
    }

    /// Check if this is the null GUID
    #[inline]
    pub const fn is_null(&self) -> bool {
        self.0 == 0
    }
}

impl From<i64> for Guid {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_guid() {
        assert!(Guid::NULL.is_null());
        assert!(Guid::default().is_null());
        assert!(!Guid::new(42).is_null());
    }

    #[test]
    fn test_display() {
        assert_eq!(Guid::new(1001).to_string(), "1001");
        assert_eq!(Guid::from(-7).raw(), -7);
    }
}
