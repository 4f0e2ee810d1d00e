//! Categorized error codes
//!
//! Internal components report failures as small negative integers. The
//! process-wide [`ErrorCategory`] translates those codes into messages, and
//! [`ErrorCode`] pairs a code with its category so the message can be looked
//! up later.
//!
//! # Example
//!
//! ```
//! use ark_core::error::ErrorCategory;
//!
//! let err = ErrorCategory::make_error_code(-1);
//! assert_eq!(err.message(), "first error");
//! assert_eq!(err.to_string(), "ark_error: first error (-1)");
//! ```

use std::fmt;
use std::sync::LazyLock;

/// Error category singleton
static CATEGORY: LazyLock<ErrorCategory> = LazyLock::new(|| ErrorCategory { name: "ark_error" });

/// Maps internal error codes to messages
#[derive(Debug)]
pub struct ErrorCategory {
    name: &'static str,
}

impl ErrorCategory {
    /// Get the process-wide category
    pub fn get() -> &'static ErrorCategory {
        &CATEGORY
    }

    /// Category name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Message for `code`
    pub fn message(&self, code: i32) -> &'static str {
        match code {
            -1 => "first error",
            -2 => "second error",
            _ => "unknown error",
        }
    }

    /// Wrap `code` into an error value bound to this category
    pub fn make_error_code(code: i32) -> ErrorCode {
        ErrorCode::new(code)
    }
}

/// An error code together with the category that describes it
#[derive(Debug, Clone, Copy)]
pub struct ErrorCode {
    value: i32,
    category: &'static ErrorCategory,
}

impl ErrorCode {
    /// Create an error code in the process-wide category
    pub fn new(value: i32) -> Self {
        Self {
            value,
            category: ErrorCategory::get(),
        }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn category(&self) -> &'static ErrorCategory {
        self.category
    }

    /// Message looked up from the category
    pub fn message(&self) -> &'static str {
        self.category.message(self.value)
    }
}

impl PartialEq for ErrorCode {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && std::ptr::eq(self.category, other.category)
    }
}

impl Eq for ErrorCode {}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ({})",
            self.category.name(),
            self.message(),
            self.value
        )
    }
}

impl std::error::Error for ErrorCode {}
