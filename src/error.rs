use thiserror::Error;

/// Library result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised before any channel call is attempted.
///
/// Remote failures (a denied permission, a timeout, an unreachable native
/// side) are deliberately NOT part of this taxonomy: boolean operations
/// degrade to `false` and list operations to `[]`, because a denial is an
/// expected outcome, not an exceptional one.
#[derive(Debug, Error)]
pub enum Error {
    #[error("'data_access' must be the same length as 'types' (expected {expected}, got {actual})")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("'wait_timeout' must be positive, got {0}")]
    NonPositiveTimeout(f64),

    #[error("Unsupported value: {0}")]
    UnsupportedValue(&'static str),

    #[error("'{operation}' is not supported on {platform}")]
    UnsupportedPlatform {
        operation: &'static str,
        platform: &'static str,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Runtime error: {0}")]
    Runtime(#[from] std::io::Error),
}
