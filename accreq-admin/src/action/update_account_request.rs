use accreq_core::{
    format::result::JsonResult,
    messages::{
        account_request_data::AccountRequestData,
        account_request_update::{AccountRequestUpdate, AccountRequestUpdateRequest},
    },
    types::{AccountRequest, AccountRequestId, AccountRequestStatus},
};

use crate::{
    interfaces::{AccountRequestStore, EmailComposer, EmailSender},
    services::{email::EmailService, store::StoreService},
};

use super::{config::ActionConfig, error::ActionError, request::ActionRequest, Action};

pub const ACCOUNT_REQUEST_ID: &str = "id";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Only the status changes, and the instructor is emailed a join link.
    Approval,
    FieldUpdate,
}

pub fn transition_for(current: AccountRequestStatus, requested: AccountRequestStatus) -> Transition {
    if requested == AccountRequestStatus::Approved && current.is_approvable() {
        Transition::Approval
    } else {
        Transition::FieldUpdate
    }
}

/// Does not check the user. Wrap in [`AdminOnly`](super::guard::AdminOnly).
pub struct UpdateAccountRequestAction<R, C, S> {
    config: ActionConfig,
    store: StoreService<R>,
    email: EmailService<C, S>,
}

impl<R: AccountRequestStore, C: EmailComposer, S: EmailSender> UpdateAccountRequestAction<R, C, S> {
    pub fn new(store: R, composer: C, sender: S, config: ActionConfig) -> Self {
        Self {
            config,
            store: StoreService::new(store),
            email: EmailService::new(composer, sender),
        }
    }

    pub fn update(
        &mut self,
        raw_id: &str,
        payload: AccountRequestUpdateRequest,
    ) -> Result<AccountRequestData, ActionError> {
        self.process(raw_id, Ok(payload))
    }

    // The body is checked only after the lookup, so an unknown id wins over a
    // bad body.
    fn process(
        &mut self,
        raw_id: &str,
        payload: Result<AccountRequestUpdateRequest, ActionError>,
    ) -> Result<AccountRequestData, ActionError> {
        let id: AccountRequestId = raw_id.parse()?;
        let account_request = self.store.get_account_request(&id)?;
        let update = payload?.validate()?;

        let updated = match transition_for(account_request.status(), update.status) {
            Transition::Approval => self.approve(account_request)?,
            Transition::FieldUpdate => self.update_fields(account_request, update)?,
        };
        Ok(AccountRequestData::from(&updated))
    }

    fn approve(&mut self, mut account_request: AccountRequest) -> Result<AccountRequest, ActionError> {
        log::info!(
            "approving account request {}, previous status: {}",
            account_request.id(),
            account_request.status()
        );
        account_request.set_status(AccountRequestStatus::Approved);
        let approved = self.store.update_account_request(account_request)?;
        self.email
            .send_account_join_email(&approved, &self.config.app_url)?;
        Ok(approved)
    }

    fn update_fields(
        &mut self,
        mut account_request: AccountRequest,
        update: AccountRequestUpdate,
    ) -> Result<AccountRequest, ActionError> {
        if update.status != account_request.status() {
            log::debug!(
                "requested status {} ignored for account request {}, keeping {}",
                update.status,
                account_request.id(),
                account_request.status()
            );
        }
        account_request.set_name(&update.name);
        account_request.set_email(&update.email);
        account_request.set_institute(&update.institute);
        account_request.set_comments(update.comments);
        let updated = self.store.update_account_request(account_request)?;
        log::info!("updated fields of account request {}", updated.id());
        Ok(updated)
    }
}

impl<R: AccountRequestStore, C: EmailComposer, S: EmailSender> Action
    for UpdateAccountRequestAction<R, C, S>
{
    type Output = AccountRequestData;

    fn execute(&mut self, request: &ActionRequest) -> Result<JsonResult<Self::Output>, ActionError> {
        let raw_id = request.non_null_param(ACCOUNT_REQUEST_ID)?;
        // a bad body is reported only after the lookup in `process`
        let payload = request.body().and_then(|body| {
            AccountRequestUpdateRequest::from_json(body).map_err(ActionError::from)
        });
        self.process(raw_id, payload).map(JsonResult::ok)
    }
}
