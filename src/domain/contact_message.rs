use super::{ContactEmail, RequiredField, SubmissionDraft};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("All fields are required.")]
    MissingFields,
    #[error("Invalid email format.")]
    InvalidEmail(String),
}

/// A draft that passed validation and may be sent over the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: RequiredField,
    pub email: ContactEmail,
    pub content: RequiredField,
}

impl TryFrom<&SubmissionDraft> for ContactMessage {
    type Error = ValidationError;

    fn try_from(draft: &SubmissionDraft) -> Result<Self, Self::Error> {
        // Every field is checked for presence before the email format.
        if draft.has_missing_fields() {
            return Err(ValidationError::MissingFields);
        }
        let name = RequiredField::parse(draft.name().to_owned())
            .map_err(|_| ValidationError::MissingFields)?;
        let content = RequiredField::parse(draft.content().to_owned())
            .map_err(|_| ValidationError::MissingFields)?;
        let email =
            ContactEmail::parse(draft.email().to_owned()).map_err(ValidationError::InvalidEmail)?;
        Ok(Self {
            name,
            email,
            content,
        })
    }
}
