use crate::form::LeadForm;
use crate::variant::LeadVariant;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Local part and domain without whitespace or `@`, domain with a dot.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is a valid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadField {
    Name,
    Email,
    Message,
}

impl fmt::Display for LeadField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        })
    }
}

/// Input problem the visitor can fix. The page variant supplies the visible wording.
#[df_derive::df_error]
#[derive(Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: LeadField },

    #[error("{field} must be a valid email address")]
    InvalidEmail { field: LeadField },

    #[error("message must be at most {max} characters")]
    MessageTooLong { max: usize, len: usize },
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Runs the ordered checks against the trimmed form: required fields, then email format, then
/// message length (in characters). Stops at the first failure.
pub fn validate(
    form: &LeadForm,
    variant: &LeadVariant,
    max_message_length: usize,
) -> Result<(), ValidationError> {
    let name = form.name.trim();
    let email = form.email.trim();
    let message = form.message.trim();

    if variant.name_required && name.is_empty() {
        return Err(ValidationError::Required { field: LeadField::Name });
    }
    if variant.email_required && email.is_empty() {
        return Err(ValidationError::Required { field: LeadField::Email });
    }
    if message.is_empty() {
        return Err(ValidationError::Required { field: LeadField::Message });
    }

    if !email.is_empty() && !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail { field: LeadField::Email });
    }

    let len = message.chars().count();
    if len > max_message_length {
        return Err(ValidationError::MessageTooLong { max: max_message_length, len });
    }

    Ok(())
}
