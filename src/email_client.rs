use reqwest::Client;
use secrecy::{ExposeSecret, Secret};

use crate::domain::{ContactEmail, ContactMessage};

/// Relays contact messages through the EmailJS REST API.
///
/// Recipients, the recipient display name and the EmailJS identifiers are
/// fixed at construction; only the sender's details vary per message.
#[derive(Clone, Debug)]
pub struct EmailClient {
    http_client: Client,
    base_url: String,
    service_id: String,
    template_id: String,
    public_key: Secret<String>,
    recipients: Vec<ContactEmail>,
    recipient_name: String,
}

#[derive(serde::Serialize)]
struct SendEmailRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(serde::Serialize)]
struct TemplateParams<'a> {
    to_email: String,
    to_name: &'a str,
    from_name: &'a str,
    from_email: &'a str,
    message: &'a str,
}

impl EmailClient {
    pub fn new(
        base_url: String,
        service_id: String,
        template_id: String,
        public_key: Secret<String>,
        recipients: Vec<ContactEmail>,
        recipient_name: String,
    ) -> Self {
        Self {
            http_client: Client::new(),
            base_url,
            service_id,
            template_id,
            public_key,
            recipients,
            recipient_name,
        }
    }

    fn recipient_list(&self) -> String {
        self.recipients
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join(", ")
    }

    #[tracing::instrument(name = "Relay a contact message by email", skip_all)]
    pub async fn send_email(&self, message: &ContactMessage) -> Result<(), reqwest::Error> {
        let url = format!("{}/api/v1.0/email/send", self.base_url);
        let request_body = SendEmailRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: self.public_key.expose_secret(),
            template_params: TemplateParams {
                to_email: self.recipient_list(),
                to_name: &self.recipient_name,
                from_name: message.name.as_ref(),
                from_email: message.email.as_ref(),
                message: message.content.as_ref(),
            },
        };
        self.http_client
            .post(&url)
            .json(&request_body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
