use accreq_core::types::AccountRequest;

use crate::{
    action::error::ActionError,
    interfaces::{EmailComposer, EmailSender},
};

pub struct EmailService<C, S> {
    composer: C,
    sender: S,
}

impl<C: EmailComposer, S: EmailSender> EmailService<C, S> {
    pub fn new(composer: C, sender: S) -> Self {
        Self { composer, sender }
    }
    pub(crate) fn send_account_join_email(
        &mut self,
        request: &AccountRequest,
        app_url: &str,
    ) -> Result<(), ActionError> {
        let email = self.composer.compose_account_join_email(
            &request.registration_url(app_url),
            request.email(),
            request.name(),
        );
        log::debug!("sending {:?} email to {}", email.kind, email.recipient);
        self.sender.send_email(email).map_err(|e| {
            log::error!(
                "join email for account request {} not sent, approval already committed: {}",
                request.id(),
                e
            );
            ActionError::from(e)
        })
    }
}
