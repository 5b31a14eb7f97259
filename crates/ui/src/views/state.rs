use dioxus::prelude::*;

use services::{BackendError, ProfileError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// Local validation failure: nothing was sent to the backend.
    EmptyProfile,
    /// A chosen file could not be read from disk.
    FileUnreadable,
    /// The backend answered but refused the request, with its own detail.
    Rejected(String),
    /// The backend could not be reached or answered with an error status.
    Unavailable,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            ViewError::EmptyProfile => "Please paste or upload your profile first.".to_string(),
            ViewError::FileUnreadable => {
                "That file could not be read. Check the path and try again.".to_string()
            }
            ViewError::Rejected(detail) => format!("Upload failed: {detail}"),
            ViewError::Unavailable => {
                "The advisor backend is unreachable. Please try again.".to_string()
            }
            ViewError::Unknown => "Something went wrong. Please try again.".to_string(),
        }
    }

    /// Error mapping stays at the UI boundary, per service error kind.
    #[must_use]
    pub fn from_profile_error(err: &ProfileError) -> Self {
        match err {
            ProfileError::EmptyProfile => ViewError::EmptyProfile,
            ProfileError::Backend(err) => Self::from_backend_error(err),
            _ => ViewError::Unknown,
        }
    }

    /// Rejections keep the backend's detail for display; transport and
    /// status failures collapse to one retryable message.
    #[must_use]
    pub fn from_backend_error(err: &BackendError) -> Self {
        match err {
            BackendError::Rejected(detail) => ViewError::Rejected(detail.clone()),
            BackendError::HttpStatus(_) | BackendError::Http(_) => ViewError::Unavailable,
            _ => ViewError::Unknown,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(err.clone()),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
