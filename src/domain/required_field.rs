/// A form field that must not be left empty.
///
/// Emptiness is the only rule: a field holding whitespace counts as filled,
/// mirroring what the browser form sends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredField(String);

impl RequiredField {
    pub fn parse(s: String) -> Result<RequiredField, String> {
        if s.is_empty() {
            Err("Field cannot be empty.".into())
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for RequiredField {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
