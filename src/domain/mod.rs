mod contact_email;
mod contact_message;
mod draft;
mod required_field;

pub use contact_email::ContactEmail;
pub use contact_message::{ContactMessage, ValidationError};
pub use draft::SubmissionDraft;
pub use required_field::RequiredField;
