use df_domain::constants::{DEFAULT_LANG, DEFAULT_TOPIC};
use df_domain::lead::LeadPayload;

/// Raw values of the lead form, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub topic: String,
    pub premium: bool,
    pub lang: String,
    /// Honeypot, hidden from people.
    pub company: String,
}

impl LeadForm {
    /// Whether the honeypot was filled.
    #[must_use]
    pub fn is_spam(&self) -> bool {
        !self.company.trim().is_empty()
    }

    /// Clears what the visitor typed. `lang` is page state and survives.
    pub fn reset(&mut self) {
        *self = Self { lang: std::mem::take(&mut self.lang), ..Self::default() };
    }

    /// Trimmed payload. `enrich` appends topic and premium interest to the message.
    #[must_use]
    pub fn to_payload(&self, enrich: bool) -> LeadPayload {
        let message = self.message.trim();
        let topic = non_empty_or(self.topic.trim(), DEFAULT_TOPIC);
        let lang = non_empty_or(self.lang.trim(), DEFAULT_LANG);

        let message = if enrich {
            let premium = if self.premium { "Si" } else { "No" };
            format!("{message}\n\nCategoria: {topic}\nQuiere premium: {premium}")
        } else {
            message.to_owned()
        };

        LeadPayload {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            message,
            lang: lang.to_owned(),
            topic: topic.to_owned(),
            company: String::new(),
        }
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

/// Color family of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Info,
    Success,
    Error,
}

impl StatusTone {
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Info => "#64748B",
            Self::Success => "#0D9488",
            Self::Error => "#DC2626",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub tone: StatusTone,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>, tone: StatusTone) -> Self {
        Self { text: text.into(), tone }
    }
}

/// Submit affordance as drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitState {
    pub enabled: bool,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Rejected,
    Submitting,
    Succeeded,
    Failed,
}

/// What a view needs to mirror the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    /// Current phase, or the outcome of the last submission.
    pub phase: SubmissionPhase,
    pub status: Option<StatusMessage>,
    pub submit: SubmitState,
}

impl FormSnapshot {
    pub(crate) fn idle(label: &str) -> Self {
        Self {
            phase: SubmissionPhase::Idle,
            status: None,
            submit: SubmitState { enabled: true, label: label.to_owned() },
        }
    }
}
