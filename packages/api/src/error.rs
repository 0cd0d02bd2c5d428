use store::StorageError;

/// Errors raised by the panel's collaborators.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The statistics backend could not produce a result.
    #[error("statistics unavailable: {0}")]
    Unavailable(String),

    #[error("session token must not be empty")]
    EmptyToken,

    #[error(transparent)]
    Storage(#[from] StorageError),
}
