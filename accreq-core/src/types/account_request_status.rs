#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountRequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl AccountRequestStatus {
    pub fn is_approvable(&self) -> bool {
        matches!(
            self,
            AccountRequestStatus::Pending | AccountRequestStatus::Rejected
        )
    }
}

impl std::fmt::Display for AccountRequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AccountRequestStatus::Pending => "PENDING",
            AccountRequestStatus::Approved => "APPROVED",
            AccountRequestStatus::Rejected => "REJECTED",
        };
        write!(f, "{s}")
    }
}
