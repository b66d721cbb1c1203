pub(crate) mod config;
pub(crate) mod error;
pub(crate) mod guard;
pub(crate) mod request;
pub(crate) mod update_account_request;

use accreq_core::format::result::{ActionResult, JsonResult};

use self::{error::ActionError, request::ActionRequest};

pub trait Action {
    type Output: serde::Serialize;

    fn execute(&mut self, request: &ActionRequest) -> Result<JsonResult<Self::Output>, ActionError>;

    fn respond(&mut self, request: &ActionRequest) -> ActionResult {
        match self.execute(request) {
            Ok(result) => result.into_response(),
            Err(e) => {
                let status = e.status();
                if status.is_client_error() {
                    log::warn!("request rejected, {}: {}", status, e);
                } else {
                    log::error!("request failed, {}: {}", status, e);
                }
                ActionResult::error(status, e.to_string())
            }
        }
    }
}
