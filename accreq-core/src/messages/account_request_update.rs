use crate::types::AccountRequestStatus;

/// Request body for updating an account request, as it arrives on the wire.
///
/// Every field is optional here so that a missing field is reported by
/// [`AccountRequestUpdateRequest::validate`] instead of a generic parse error.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountRequestUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institute: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AccountRequestStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AccountRequestUpdate {
    pub name: String,
    pub email: String,
    pub institute: String,
    pub status: AccountRequestStatus,
    pub comments: Option<String>,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct InvalidRequestBody(pub String);

fn required<T>(value: Option<T>, field: &str) -> Result<T, InvalidRequestBody> {
    value.ok_or_else(|| InvalidRequestBody(format!("{} cannot be null", field)))
}

impl AccountRequestUpdateRequest {
    pub fn from_json(body: &str) -> Result<Self, InvalidRequestBody> {
        serde_json::from_str(body).map_err(|e| InvalidRequestBody(e.to_string()))
    }

    pub fn validate(self) -> Result<AccountRequestUpdate, InvalidRequestBody> {
        Ok(AccountRequestUpdate {
            name: required(self.name, "name")?,
            email: required(self.email, "email")?,
            institute: required(self.institute, "institute")?,
            status: required(self.status, "status")?,
            comments: self.comments,
        })
    }
}
