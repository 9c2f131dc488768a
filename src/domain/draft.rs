/// The in-progress form data, edited field by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionDraft {
    name: String,
    email: String,
    content: String,
}

impl SubmissionDraft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            content: content.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn has_missing_fields(&self) -> bool {
        self.name.is_empty() || self.email.is_empty() || self.content.is_empty()
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.content.clear();
    }
}
