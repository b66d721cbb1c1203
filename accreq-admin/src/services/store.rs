use accreq_core::types::{AccountRequest, AccountRequestId};

use crate::{action::error::ActionError, interfaces::AccountRequestStore};

pub struct StoreService<R> {
    store: R,
}

pub(crate) fn not_found_message(id: &AccountRequestId) -> String {
    format!("Account request with id = {} not found", id)
}

impl<R: AccountRequestStore> StoreService<R> {
    pub fn new(store: R) -> Self {
        Self { store }
    }
    pub(crate) fn get_account_request(
        &mut self,
        id: &AccountRequestId,
    ) -> Result<AccountRequest, ActionError> {
        match self.store.get_account_request(id) {
            Some(request) => {
                log::trace!("loaded account request, id: {}, status: {}", id, request.status());
                Ok(request)
            }
            None => {
                log::debug!("account request not found, id: {}", id);
                Err(ActionError::NotFound(not_found_message(id)))
            }
        }
    }
    pub(crate) fn update_account_request(
        &mut self,
        request: AccountRequest,
    ) -> Result<AccountRequest, ActionError> {
        let id = request.id();
        let updated = self.store.update_account_request(request)?;
        log::debug!("persisted account request, id: {}, status: {}", id, updated.status());
        Ok(updated)
    }
}
