fn default_app_name() -> String {
    String::from("TEAMMATES")
}

fn default_sender_name() -> String {
    String::from("TEAMMATES Admin")
}

fn default_sender_email() -> String {
    String::from("admin@teammates.example")
}

fn default_support_email() -> String {
    String::from("support@teammates.example")
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActionConfig {
    pub app_url: String,
    #[serde(default = "default_app_name")]
    pub app_name: String,
    #[serde(default = "default_sender_name")]
    pub sender_name: String,
    #[serde(default = "default_sender_email")]
    pub sender_email: String,
    #[serde(default = "default_support_email")]
    pub support_email: String,
}

impl ActionConfig {
    pub fn new(app_url: impl Into<String>) -> Self {
        Self {
            app_url: app_url.into(),
            app_name: default_app_name(),
            sender_name: default_sender_name(),
            sender_email: default_sender_email(),
            support_email: default_support_email(),
        }
    }
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
    pub fn with_support_email(mut self, support_email: impl Into<String>) -> Self {
        self.support_email = support_email.into();
        self
    }
    pub fn with_sender(mut self, name: impl Into<String>, email: impl Into<String>) -> Self {
        self.sender_name = name.into();
        self.sender_email = email.into();
        self
    }
}
