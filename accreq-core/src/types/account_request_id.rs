use core::{fmt, str::FromStr};

use uuid::Uuid;

#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct AccountRequestId(Uuid);

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid UUID string: {value}")]
pub struct InvalidIdentifier {
    pub value: String,
    pub reason: String,
}

impl AccountRequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AccountRequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for AccountRequestId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

// Only the dashed 8-4-4-4-12 form is accepted.
const HYPHENATED_LEN: usize = 36;

impl FromStr for AccountRequestId {
    type Err = InvalidIdentifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != HYPHENATED_LEN {
            return Err(InvalidIdentifier {
                value: s.to_string(),
                reason: format!("expected {} characters, got {}", HYPHENATED_LEN, s.len()),
            });
        }
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| InvalidIdentifier {
                value: s.to_string(),
                reason: e.to_string(),
            })
    }
}

impl fmt::Display for AccountRequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}
