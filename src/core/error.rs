//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`CalcError`] - arithmetic expression evaluation errors
//! - [`FetchError`] - network/fetch-related errors for HTTP requests
//!
//! Filesystem lookups intentionally do not appear here: path queries are
//! total functions returning `Option`/sentinel strings, and the command
//! layer formats the user-facing message.

use thiserror::Error;

/// Errors produced by the `calc` expression evaluator.
///
/// All variants are collapsed to a single generic message at the command
/// boundary; the detail exists for tests and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Input continues past a complete expression.
    #[error("unexpected token")]
    UnexpectedToken,
    /// A number was expected but not found.
    #[error("expected number")]
    ExpectedNumber,
    /// A `(` was never closed.
    #[error("unclosed parenthesis")]
    UnclosedParenthesis,
    /// Division or modulo by zero.
    #[error("division by zero")]
    DivisionByZero,
    /// The final value is NaN or infinite.
    #[error("non-finite result")]
    NonFinite,
}

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// Browser window not available.
    #[error("browser window not available")]
    NoWindow,
    /// Failed to create HTTP request.
    #[error("failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, DNS, connection reset).
    #[error("network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status).
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body.
    #[error("failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text).
    #[error("invalid response content")]
    InvalidContent,
    /// Request exceeded the configured deadline.
    #[error("request timed out")]
    Timeout,
}
