use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::validation;

use super::{AccountRequestId, AccountRequestStatus};

pub const JOIN_PAGE: &str = "/web/join";

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountRequest {
    id: AccountRequestId,
    name: String,
    email: String,
    institute: String,
    registration_key: String,
    status: AccountRequestStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    comments: Option<String>,
    created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    registered_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
}

impl AccountRequest {
    pub fn new(email: &str, name: &str, institute: &str, comments: Option<String>) -> Self {
        Self {
            id: AccountRequestId::new(),
            name: validation::sanitize_name(name),
            email: validation::sanitize_email(email),
            institute: validation::sanitize_name(institute),
            registration_key: Uuid::new_v4().simple().to_string(),
            status: AccountRequestStatus::Pending,
            comments,
            created_at: Utc::now(),
            registered_at: None,
            updated_at: None,
        }
    }

    pub fn id(&self) -> AccountRequestId {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn email(&self) -> &str {
        &self.email
    }
    pub fn institute(&self) -> &str {
        &self.institute
    }
    pub fn registration_key(&self) -> &str {
        &self.registration_key
    }
    pub fn status(&self) -> AccountRequestStatus {
        self.status
    }
    pub fn comments(&self) -> Option<&str> {
        self.comments.as_deref()
    }
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
    pub fn registered_at(&self) -> Option<DateTime<Utc>> {
        self.registered_at
    }
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = validation::sanitize_name(name);
    }
    pub fn set_email(&mut self, email: &str) {
        self.email = validation::sanitize_email(email);
    }
    pub fn set_institute(&mut self, institute: &str) {
        self.institute = validation::sanitize_name(institute);
    }
    pub fn set_status(&mut self, status: AccountRequestStatus) {
        self.status = status;
    }
    pub fn set_comments(&mut self, comments: Option<String>) {
        self.comments = comments;
    }
    pub fn set_updated_at(&mut self, updated_at: DateTime<Utc>) {
        self.updated_at = Some(updated_at);
    }

    pub fn registration_url(&self, app_url: &str) -> String {
        format!(
            "{}{}?iscreatingaccount=true&key={}",
            app_url.trim_end_matches('/'),
            JOIN_PAGE,
            self.registration_key
        )
    }

    pub fn invalidity_info(&self) -> Vec<String> {
        [
            validation::invalidity_info_for_person_name(&self.name),
            validation::invalidity_info_for_email(&self.email),
            validation::invalidity_info_for_institute_name(&self.institute),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.invalidity_info().is_empty()
    }
}
