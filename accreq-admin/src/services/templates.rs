use crate::{
    action::config::ActionConfig,
    interfaces::{EmailComposer, EmailType, EmailWrapper},
};

const NEW_INSTRUCTOR_ACCOUNT_WELCOME: &str = "Hello ${userName},

Your request for an instructor account on ${appName} has been approved.

Use the link below to finish setting up your account:
${joinUrl}

If the link does not open, copy it into the address bar of your browser.
Questions can be sent to ${supportEmail}.

The ${appName} Team
";

/// Replaces every `${key}` in `template` with its value.
pub(crate) fn populate_template(template: &str, values: &[(&str, &str)]) -> String {
    values
        .iter()
        .fold(template.to_string(), |acc, (key, value)| {
            acc.replace(&format!("${{{}}}", key), value)
        })
}

#[derive(Clone, Debug)]
pub struct TemplateEmailComposer {
    app_name: String,
    sender_name: String,
    sender_email: String,
    support_email: String,
}

impl TemplateEmailComposer {
    pub fn new(config: &ActionConfig) -> Self {
        Self {
            app_name: config.app_name.clone(),
            sender_name: config.sender_name.clone(),
            sender_email: config.sender_email.clone(),
            support_email: config.support_email.clone(),
        }
    }
}

impl EmailComposer for TemplateEmailComposer {
    fn compose_account_join_email(
        &self,
        registration_url: &str,
        email: &str,
        name: &str,
    ) -> EmailWrapper {
        let content = populate_template(
            NEW_INSTRUCTOR_ACCOUNT_WELCOME,
            &[
                ("appName", &self.app_name),
                ("joinUrl", registration_url),
                ("supportEmail", &self.support_email),
                // last, so placeholders inside a user-supplied name stay literal
                ("userName", name),
            ],
        );
        EmailWrapper {
            kind: EmailType::NewInstructorAccountWelcome,
            recipient: email.to_string(),
            bcc: Some(self.support_email.clone()),
            sender_name: self.sender_name.clone(),
            sender_email: self.sender_email.clone(),
            reply_to: self.support_email.clone(),
            subject: format!("{0}: Welcome to {0}! {1}", self.app_name, name),
            content,
        }
    }
}
