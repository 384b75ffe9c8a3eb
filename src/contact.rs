//! Contact form stub
//!
//! There is no backend: a submission only produces an acknowledgment for the
//! visitor, after which the form is cleared.

/// Values read from the form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Message shown to the visitor after submitting
    pub fn acknowledgment(&self) -> String {
        let name = self.name.trim();
        let name = if name.is_empty() { "there" } else { name };
        format!(
            "Thanks {}! Your message was prepared to be sent. (No backend configured)",
            name
        )
    }
}

/// Value of a field found by `name`, or by `id` when the named field is
/// missing or empty
pub fn field_fallback(by_name: Option<String>, by_id: Option<String>) -> String {
    match by_name {
        Some(value) if !value.is_empty() => value,
        _ => by_id.unwrap_or_default(),
    }
}
