#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseStatus {
    Ok,
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    InternalServerError,
}

impl ResponseStatus {
    pub fn code(&self) -> u16 {
        match self {
            ResponseStatus::Ok => 200,
            ResponseStatus::BadRequest => 400,
            ResponseStatus::Unauthorized => 401,
            ResponseStatus::Forbidden => 403,
            ResponseStatus::NotFound => 404,
            ResponseStatus::InternalServerError => 500,
        }
    }
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.code())
    }
}

impl std::fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ResponseStatus::Ok => "Ok",
            ResponseStatus::BadRequest => "BadRequest",
            ResponseStatus::Unauthorized => "Unauthorized",
            ResponseStatus::Forbidden => "Forbidden",
            ResponseStatus::NotFound => "NotFound",
            ResponseStatus::InternalServerError => "InternalServerError",
        };
        write!(f, "{} {s}", self.code())
    }
}
