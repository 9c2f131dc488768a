use reqwest::Client;

use crate::domain::ContactMessage;

pub const FALLBACK_REJECTION: &str = "Failed to send message.";

#[derive(thiserror::Error, Debug)]
pub enum MessagesApiError {
    #[error("Failed to reach the messages API")]
    Transport(#[from] reqwest::Error),
    #[error("{0}")]
    Rejected(String),
}

/// Client for the site's own message-storage endpoint.
#[derive(Clone, Debug)]
pub struct MessagesClient {
    http_client: Client,
    base_url: String,
}

#[derive(serde::Serialize)]
struct SubmitMessageRequest<'a> {
    name: &'a str,
    email: &'a str,
    content: &'a str,
}

#[derive(serde::Deserialize)]
struct RejectionBody {
    error: Option<String>,
}

impl MessagesClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http_client: Client::new(),
            base_url,
        }
    }

    #[tracing::instrument(
        name = "Submit a message to the messages API",
        skip_all,
        fields(status = tracing::field::Empty)
    )]
    pub async fn submit(&self, message: &ContactMessage) -> Result<(), MessagesApiError> {
        let url = format!("{}/api/messages", self.base_url);
        let request_body = SubmitMessageRequest {
            name: message.name.as_ref(),
            email: message.email.as_ref(),
            content: message.content.as_ref(),
        };
        let response = self
            .http_client
            .post(&url)
            .json(&request_body)
            .send()
            .await?;
        let status = response.status();
        tracing::Span::current().record("status", &tracing::field::display(status));
        if status.is_success() {
            return Ok(());
        }
        let reason = response
            .json::<RejectionBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| FALLBACK_REJECTION.to_owned());
        Err(MessagesApiError::Rejected(reason))
    }
}
