use std::{path::PathBuf, sync::Once};

use accreq_admin::{
    Action, ActionConfig, ActionError, ActionRequest, AdminOnly, TemplateEmailComposer,
    UpdateAccountRequestAction, UserInfo, ACCOUNT_REQUEST_ID,
};
use accreq_core::{
    format::result::ActionResult,
    messages::{account_request_data::AccountRequestData, account_request_update::AccountRequestUpdateRequest},
    types::{AccountRequest, AccountRequestStatus},
};
use log::LevelFilter;
use serde_json::Value;

use super::{
    email::MockEmailSender,
    store::{FileStore, MockStore, SeedableStore},
};

pub const APP_URL: &str = "https://teammates.example";

static INIT: Once = Once::new();

fn init_logger() {
    INIT.call_once(|| {
        env_logger::builder()
            .is_test(true)
            .filter_level(LevelFilter::Trace)
            .try_init()
            .ok();
    });
}

pub fn config() -> ActionConfig {
    ActionConfig::new(APP_URL).with_support_email("help@teammates.example")
}

pub fn admin() -> UserInfo {
    UserInfo::admin("admin-1")
}

pub fn sample_request(status: AccountRequestStatus) -> AccountRequest {
    let mut request = AccountRequest::new(
        "alice@uni.edu",
        "Alice Tan",
        "National University, Singapore",
        Some(String::from("Teaching CS1010 next term")),
    );
    request.set_status(status);
    request
}

pub fn payload(
    name: &str,
    email: &str,
    institute: &str,
    status: AccountRequestStatus,
    comments: Option<&str>,
) -> AccountRequestUpdateRequest {
    AccountRequestUpdateRequest {
        name: Some(name.to_string()),
        email: Some(email.to_string()),
        institute: Some(institute.to_string()),
        status: Some(status),
        comments: comments.map(ToString::to_string),
    }
}

pub type HarnessAction<R> =
    AdminOnly<UpdateAccountRequestAction<R, TemplateEmailComposer, MockEmailSender>>;

pub struct ActionHarness<R: SeedableStore> {
    pub store: R,
    pub sender: MockEmailSender,
    pub action: HarnessAction<R>,
}

impl<R: SeedableStore> ActionHarness<R> {
    pub fn new_helper(store: R) -> Self {
        init_logger();
        let config = config();
        let sender = MockEmailSender::new();
        let action = AdminOnly::new(UpdateAccountRequestAction::new(
            store.clone(),
            TemplateEmailComposer::new(&config),
            sender.clone(),
            config,
        ));
        Self {
            store,
            sender,
            action,
        }
    }

    pub fn seed(&self, status: AccountRequestStatus) -> AccountRequest {
        let request = sample_request(status);
        self.store.insert(request.clone());
        request
    }

    pub fn store_row(&self, request: &AccountRequest) -> AccountRequest {
        self.store.stored(&request.id()).unwrap()
    }

    pub fn get_calls(&self) -> usize {
        self.store.get_calls()
    }

    pub fn update_calls(&self) -> usize {
        self.store.update_calls()
    }

    /// Calls the action directly, skipping the admin guard and JSON layer.
    pub fn update(
        &mut self,
        raw_id: &str,
        payload: AccountRequestUpdateRequest,
    ) -> Result<AccountRequestData, ActionError> {
        self.action.inner_mut().update(raw_id, payload)
    }

    pub fn send(&mut self, raw_id: &str, body: Value, user: Option<UserInfo>) -> ActionResult {
        let mut request = ActionRequest::new()
            .with_param(ACCOUNT_REQUEST_ID, raw_id)
            .with_body(body.to_string());
        if let Some(user) = user {
            request = request.with_user(user);
        }
        self.action.respond(&request)
    }

    pub fn respond(&mut self, request: &ActionRequest) -> ActionResult {
        self.action.respond(request)
    }
}

impl ActionHarness<MockStore> {
    pub fn new() -> Self {
        Self::new_helper(MockStore::new())
    }
}

impl ActionHarness<FileStore> {
    pub fn with_file_store(dir: PathBuf) -> Self {
        Self::new_helper(FileStore::new(dir))
    }
}
