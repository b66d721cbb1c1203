mod action;
mod interfaces;
mod services;

pub use action::{
    config::ActionConfig,
    error::ActionError,
    guard::{authorize_admin, AdminOnly},
    request::{ActionRequest, UserInfo},
    update_account_request::{transition_for, Transition, UpdateAccountRequestAction, ACCOUNT_REQUEST_ID},
    Action,
};
pub use interfaces::{
    AccountRequestStore, EmailComposer, EmailSender, EmailSendingError, EmailType, EmailWrapper,
    StoreError,
};
pub use services::templates::TemplateEmailComposer;
