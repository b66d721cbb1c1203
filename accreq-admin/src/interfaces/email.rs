#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmailType {
    NewInstructorAccountWelcome,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmailWrapper {
    pub kind: EmailType,
    pub recipient: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcc: Option<String>,
    pub sender_name: String,
    pub sender_email: String,
    pub reply_to: String,
    pub subject: String,
    pub content: String,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailSendingError {
    #[error("email service rejected the message with status {status}: {message}")]
    Rejected { status: u16, message: String },
    #[error("email service unavailable: {0}")]
    Unavailable(String),
}

pub trait EmailComposer: Send + 'static {
    fn compose_account_join_email(
        &self,
        registration_url: &str,
        email: &str,
        name: &str,
    ) -> EmailWrapper;
}

pub trait EmailSender: Send + 'static {
    fn send_email(&mut self, email: EmailWrapper) -> Result<(), EmailSendingError>;
}
