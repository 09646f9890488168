use crate::validation::{LeadField, ValidationError};
use std::borrow::Cow;

/// Every string the lead form shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadCopy {
    pub name_required: Cow<'static, str>,
    pub email_required: Cow<'static, str>,
    pub message_required: Cow<'static, str>,
    pub email_invalid: Cow<'static, str>,
    /// `{max}` is replaced with the configured limit.
    pub message_too_long: Cow<'static, str>,
    pub sending: Cow<'static, str>,
    pub success: Cow<'static, str>,
    pub failure: Cow<'static, str>,
    /// Submit label while a request is in flight.
    pub busy_label: Cow<'static, str>,
}

impl LeadCopy {
    /// Visible text for a validation failure.
    #[must_use]
    pub fn describe(&self, error: &ValidationError) -> String {
        match error {
            ValidationError::Required { field: LeadField::Name } => self.name_required.to_string(),
            ValidationError::Required { field: LeadField::Email } => {
                self.email_required.to_string()
            },
            ValidationError::Required { field: LeadField::Message } => {
                self.message_required.to_string()
            },
            ValidationError::InvalidEmail { .. } => self.email_invalid.to_string(),
            ValidationError::MessageTooLong { max, .. } => {
                self.message_too_long.replace("{max}", &max.to_string())
            },
        }
    }
}

/// Page-specific behavior of the one lead pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadVariant {
    pub name_required: bool,
    pub email_required: bool,
    /// Append topic and premium interest to the message.
    pub enrich_message: bool,
    pub copy: LeadCopy,
}

impl LeadVariant {
    /// "Suggest a tool" page: anonymous ideas, email optional.
    #[must_use]
    pub fn ideas() -> Self {
        Self {
            name_required: false,
            email_required: false,
            enrich_message: true,
            copy: LeadCopy {
                name_required: "Indica tu nombre.".into(),
                email_required: "Indica tu email.".into(),
                message_required: "Cuéntanos qué herramienta te gustaría.".into(),
                email_invalid: "Indica un email válido.".into(),
                message_too_long: "La idea debe tener máximo {max} caracteres.".into(),
                sending: "Enviando tu idea...".into(),
                success: "Listo. Revisamos tu idea y te respondemos pronto.".into(),
                failure: "No pudimos enviar la idea. Intenta nuevamente en unos minutos o escribe a hello@delete-from.com.".into(),
                busy_label: "Enviando...".into(),
            },
        }
    }

    /// Contact page: the visitor must say who they are.
    #[must_use]
    pub fn contact() -> Self {
        Self {
            name_required: true,
            email_required: true,
            enrich_message: false,
            copy: LeadCopy {
                name_required: "Indica tu nombre.".into(),
                email_required: "Indica tu email para poder responderte.".into(),
                message_required: "Escribe tu mensaje.".into(),
                email_invalid: "Indica un email válido.".into(),
                message_too_long: "El mensaje debe tener máximo {max} caracteres.".into(),
                sending: "Enviando tu mensaje...".into(),
                success: "¡Gracias! Te respondemos pronto.".into(),
                failure: "No pudimos enviar el mensaje. Intenta nuevamente en unos minutos o escribe a hello@delete-from.com.".into(),
                busy_label: "Enviando...".into(),
            },
        }
    }
}
