//! Unified error interface for sortviz.
//!
//! Error types in the higher crates implement [`ErrorCode`] so that
//! callers can branch on a stable machine-readable code instead of
//! matching on display strings.
//!
//! # Example
//!
//! ```
//! use sortviz_types::ErrorCode;
//!
//! #[derive(Debug)]
//! enum MyError {
//!     TaskPanicked,
//! }
//!
//! impl ErrorCode for MyError {
//!     fn code(&self) -> &'static str {
//!         "RUN_TASK_PANICKED"
//!     }
//!
//!     fn is_recoverable(&self) -> bool {
//!         false
//!     }
//! }
//!
//! assert_eq!(MyError::TaskPanicked.code(), "RUN_TASK_PANICKED");
//! ```

/// Unified error code interface.
///
/// # Code Format
///
/// Codes are UPPER_SNAKE_CASE, prefixed with their domain (`RUN_`),
/// and stable once defined.
///
/// # Recoverability
///
/// An error is recoverable if retrying the operation or a user action
/// may succeed. Invariant violations and panicked tasks are not.
pub trait ErrorCode {
    /// Returns a machine-readable error code.
    fn code(&self) -> &'static str;

    /// Returns whether the error is recoverable.
    fn is_recoverable(&self) -> bool;
}

/// Validates that an error code follows sortviz conventions.
///
/// # Panics
///
/// Panics with a descriptive message if the code is empty, does not
/// carry the expected prefix, or is not UPPER_SNAKE_CASE.
pub fn assert_error_code<E: ErrorCode>(err: &E, expected_prefix: &str) {
    let code = err.code();

    assert!(!code.is_empty(), "Error code must not be empty");
    assert!(
        code.starts_with(expected_prefix),
        "Error code '{}' must start with prefix '{}'",
        code,
        expected_prefix
    );
    assert!(
        is_upper_snake_case(code),
        "Error code '{}' must be UPPER_SNAKE_CASE",
        code
    );
}

/// Checks if a string is UPPER_SNAKE_CASE.
fn is_upper_snake_case(s: &str) -> bool {
    if s.is_empty() || s.starts_with('_') || s.ends_with('_') || s.contains("__") {
        return false;
    }
    s.chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}
