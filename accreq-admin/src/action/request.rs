use std::collections::HashMap;

use super::error::ActionError;

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub is_admin: bool,
}

impl UserInfo {
    pub fn admin(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            is_admin: true,
        }
    }
    pub fn regular(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            is_admin: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ActionRequest {
    params: HashMap<String, String>,
    body: Option<String>,
    user: Option<UserInfo>,
}

impl ActionRequest {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
    pub fn with_user(mut self, user: UserInfo) -> Self {
        self.user = Some(user);
        self
    }
    pub fn user(&self) -> Option<&UserInfo> {
        self.user.as_ref()
    }
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
    pub fn non_null_param(&self, key: &str) -> Result<&str, ActionError> {
        self.param(key).ok_or_else(|| {
            ActionError::InvalidIdentifier(format!("The [{}] HTTP parameter is null.", key))
        })
    }
    pub fn body(&self) -> Result<&str, ActionError> {
        self.body
            .as_deref()
            .ok_or_else(|| ActionError::InvalidBody(String::from("Request body is missing")))
    }
}
