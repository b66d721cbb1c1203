use serde::Serialize;
use serde_json::Value;

use super::{error::ErrorResponse, status::ResponseStatus};

#[derive(Clone, Debug, PartialEq)]
pub struct JsonResult<T> {
    pub status: ResponseStatus,
    pub data: T,
}

impl<T: Serialize> JsonResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            status: ResponseStatus::Ok,
            data,
        }
    }
    pub fn into_response(self) -> ActionResult {
        match serde_json::to_value(&self.data) {
            Ok(body) => ActionResult {
                status: self.status,
                body,
            },
            Err(e) => ActionResult::error(
                ResponseStatus::InternalServerError,
                format!("Failed to serialize response: {}", e),
            ),
        }
    }
}

/// What actually goes back over the wire: a status and a JSON body.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionResult {
    pub status: ResponseStatus,
    pub body: Value,
}

impl ActionResult {
    pub fn error(status: ResponseStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            body: serde_json::to_value(ErrorResponse::new(message)).unwrap_or_default(),
        }
    }
    pub fn is_ok(&self) -> bool {
        self.status == ResponseStatus::Ok
    }
    pub fn message(&self) -> Option<&str> {
        self.body.get("message").and_then(|v| v.as_str())
    }
    pub fn error_response(&self) -> Option<ErrorResponse> {
        if self.is_ok() {
            return None;
        }
        serde_json::from_value(self.body.clone()).ok()
    }
}
