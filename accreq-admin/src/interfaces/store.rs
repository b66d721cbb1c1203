use accreq_core::types::{AccountRequest, AccountRequestId};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{0}")]
    InvalidParameters(String),
    /// The row is gone, e.g. deleted between lookup and write.
    #[error("{0}")]
    EntityDoesNotExist(String),
}

pub trait AccountRequestStore: Send + 'static {
    fn get_account_request(&mut self, id: &AccountRequestId) -> Option<AccountRequest>;
    fn update_account_request(
        &mut self,
        request: AccountRequest,
    ) -> Result<AccountRequest, StoreError>;
}
