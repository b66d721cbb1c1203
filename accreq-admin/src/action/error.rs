use accreq_core::{
    format::status::ResponseStatus,
    messages::account_request_update::InvalidRequestBody,
    types::InvalidIdentifier,
};

use crate::interfaces::{EmailSendingError, StoreError};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("{0}")]
    InvalidIdentifier(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    InvalidBody(String),
    /// Sending failed after the approval was committed; nothing is rolled back.
    #[error("Failed to send notification email: {0}")]
    NotificationFailure(#[from] EmailSendingError),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
}

impl ActionError {
    pub fn status(&self) -> ResponseStatus {
        match self {
            ActionError::InvalidIdentifier(_) | ActionError::InvalidBody(_) => {
                ResponseStatus::BadRequest
            }
            ActionError::NotFound(_) => ResponseStatus::NotFound,
            ActionError::Unauthorized(_) => ResponseStatus::Unauthorized,
            ActionError::Forbidden(_) => ResponseStatus::Forbidden,
            ActionError::NotificationFailure(_) => ResponseStatus::InternalServerError,
        }
    }
}

impl From<InvalidIdentifier> for ActionError {
    fn from(e: InvalidIdentifier) -> Self {
        ActionError::InvalidIdentifier(e.to_string())
    }
}

impl From<InvalidRequestBody> for ActionError {
    fn from(e: InvalidRequestBody) -> Self {
        ActionError::InvalidBody(e.0)
    }
}

impl From<StoreError> for ActionError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::InvalidParameters(msg) => ActionError::InvalidBody(msg),
            StoreError::EntityDoesNotExist(msg) => ActionError::NotFound(msg),
        }
    }
}
