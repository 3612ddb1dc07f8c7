/// Domain errors raised at the edges of the console.
///
/// The console itself cannot fail once it holds parsed values; these errors
/// only come from parsing raw input or from a disabled action being invoked.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
