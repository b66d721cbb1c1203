use chrono::{DateTime, Utc};

use crate::types::{AccountRequest, AccountRequestStatus};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountRequestData {
    pub account_request_id: String,
    pub name: String,
    pub email: String,
    pub institute: String,
    pub registration_key: String,
    pub status: AccountRequestStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registered_at: Option<DateTime<Utc>>,
}

impl From<&AccountRequest> for AccountRequestData {
    fn from(request: &AccountRequest) -> Self {
        Self {
            account_request_id: request.id().to_string(),
            name: request.name().to_string(),
            email: request.email().to_string(),
            institute: request.institute().to_string(),
            registration_key: request.registration_key().to_string(),
            status: request.status(),
            comments: request.comments().map(ToString::to_string),
            created_at: request.created_at(),
            registered_at: request.registered_at(),
        }
    }
}
