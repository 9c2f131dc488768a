use anyhow::Context;
use tracing::field::display;
use tracing::Span;
use uuid::Uuid;

use crate::domain::{ContactMessage, SubmissionDraft, ValidationError};
use crate::email_client::EmailClient;
use crate::messages_client::{MessagesApiError, MessagesClient};
use crate::utils::error_chain_fmt;

pub const SUCCESS_MESSAGE: &str = "Message sent successfully!";

#[derive(thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("An error occurred while sending the message to the API.")]
    PrimaryTransport(#[source] anyhow::Error),
    #[error("{0}")]
    PrimaryRejected(String),
    #[error("Message sent to the API, but email delivery failed.")]
    RelayFailed(#[source] anyhow::Error),
}

impl std::fmt::Debug for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl SubmitError {
    /// The single line shown to the visitor for this failure.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// True when the messages API accepted the message but the relay did not.
    pub fn is_partial_success(&self) -> bool {
        matches!(self, SubmitError::RelayFailed(_))
    }
}

impl From<MessagesApiError> for SubmitError {
    fn from(e: MessagesApiError) -> Self {
        match e {
            MessagesApiError::Rejected(reason) => SubmitError::PrimaryRejected(reason),
            MessagesApiError::Transport(_) => SubmitError::PrimaryTransport(e.into()),
        }
    }
}

/// The message rendered above the form. At most one is shown at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Idle,
    Error(String),
    Success(String),
}

pub struct ContactForm {
    draft: SubmissionDraft,
    status: Status,
    messages_client: MessagesClient,
    email_client: EmailClient,
}

impl ContactForm {
    pub fn new(messages_client: MessagesClient, email_client: EmailClient) -> Self {
        Self {
            draft: SubmissionDraft::default(),
            status: Status::Idle,
            messages_client,
            email_client,
        }
    }

    pub fn draft(&self) -> &SubmissionDraft {
        &self.draft
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.set_name(name);
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.draft.set_email(email);
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.draft.set_content(content);
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            Status::Error(e) => Some(e),
            _ => None,
        }
    }

    pub fn success(&self) -> Option<&str> {
        match &self.status {
            Status::Success(s) => Some(s),
            _ => None,
        }
    }

    /// Run one submit cycle against the current draft.
    ///
    /// The draft is cleared only when both the messages API and the relay
    /// accept the message; on any failure it is kept as typed.
    #[tracing::instrument(
        name = "Handle a contact form submission",
        skip(self),
        fields(
            submission_id = %Uuid::new_v4(),
            sender_email = tracing::field::Empty
        )
    )]
    pub async fn handle_submit(&mut self) {
        self.status = Status::Idle;
        match self.submit().await {
            Ok(()) => {
                self.draft.clear();
                self.status = Status::Success(SUCCESS_MESSAGE.to_owned());
            }
            Err(e) => {
                match &e {
                    SubmitError::Validation(_) => {
                        tracing::info!(error.message = %e, "Rejected an invalid draft");
                    }
                    e if e.is_partial_success() => {
                        tracing::warn!(
                            error.cause_chain = ?e,
                            error.message = %e,
                            "Stored a contact message but could not relay it",
                        );
                    }
                    _ => {
                        tracing::error!(
                            error.cause_chain = ?e,
                            error.message = %e,
                            "Failed to deliver a contact message",
                        );
                    }
                }
                self.status = Status::Error(e.user_message());
            }
        }
    }

    async fn submit(&self) -> Result<(), SubmitError> {
        let message = ContactMessage::try_from(&self.draft)?;
        Span::current().record("sender_email", &display(&message.email));
        self.messages_client.submit(&message).await?;
        self.email_client
            .send_email(&message)
            .await
            .context("Failed to relay the message through EmailJS")
            .map_err(SubmitError::RelayFailed)?;
        Ok(())
    }
}
