//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by backend requests.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BackendError {
    #[error("backend request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    /// The backend answered but refused the request (`ok: false` bodies).
    #[error("backend rejected the request: {0}")]
    Rejected(String),
    #[error("backend returned an empty quiz")]
    EmptyQuiz,
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `ProfileService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProfileError {
    /// Rejected locally, before any network call.
    #[error("profile text is empty")]
    EmptyProfile,
    #[error(transparent)]
    Backend(#[from] BackendError),
}
