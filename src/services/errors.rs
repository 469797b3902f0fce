use thiserror::Error;

use crate::backend::errors::RemoteError;
use crate::domain::types::TypeConstraintError;

/// Failures recorded by the lead view.
///
/// None of these escape a view operation as a panic; each is stored as the
/// view's last error where the remote call was issued.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ViewError {
    #[error("Failed to count leads: {0}")]
    CountFetch(RemoteError),

    #[error("Failed to fetch leads: {0}")]
    RecordsFetch(RemoteError),

    #[error("Failed to synchronize contacts: {0}")]
    Sync(RemoteError),

    /// The synchronization answered with something other than the success payload.
    #[error("Contact synchronization reported: {0}")]
    SyncRejected(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type ViewResult<T> = Result<T, ViewError>;

impl ViewError {
    /// Message shown to the user, with remote error bodies unwrapped.
    pub fn user_message(&self) -> String {
        match self {
            ViewError::CountFetch(err) | ViewError::RecordsFetch(err) | ViewError::Sync(err) => {
                err.body_message().to_string()
            }
            ViewError::SyncRejected(payload) => payload.clone(),
            ViewError::InvalidInput(message) => message.clone(),
        }
    }
}

impl From<TypeConstraintError> for ViewError {
    fn from(val: TypeConstraintError) -> Self {
        ViewError::InvalidInput(val.to_string())
    }
}
