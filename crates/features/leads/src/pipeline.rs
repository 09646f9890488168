use crate::error::TransportError;
use crate::form::{FormSnapshot, LeadForm, StatusMessage, StatusTone, SubmissionPhase};
use crate::transport::LeadTransport;
use crate::validation::{ValidationError, validate};
use crate::variant::LeadVariant;
use df_domain::config::LeadConfig;
use df_kernel::with_timeout;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::watch;
use tracing::{info, instrument, warn};

/// Default label of the submit control.
pub const DEFAULT_SUBMIT_LABEL: &str = "Enviar";

/// How a call to [`LeadPipeline::submit`] ended.
#[derive(Debug)]
pub enum SubmissionOutcome {
    /// The endpoint accepted the lead.
    Delivered,
    /// Honeypot hit: nothing was sent, the visitor saw a success.
    Suppressed,
    /// Input problem, nothing was sent.
    Rejected(ValidationError),
    /// The request failed, timed out, or was refused.
    Failed(TransportError),
    /// Another submission was still in flight.
    Ignored,
}

impl SubmissionOutcome {
    /// What the visitor can observe: a success message was shown.
    #[must_use]
    pub const fn looks_successful(&self) -> bool {
        matches!(self, Self::Delivered | Self::Suppressed)
    }
}

/// Validates, filters and delivers leads for one form, publishing every state change.
///
/// State machine: `Idle -> Validating -> (Rejected | Submitting) -> (Succeeded | Failed)`.
/// The published snapshot keeps the terminal phase until the next submission starts.
#[derive(Debug)]
pub struct LeadPipeline<T> {
    transport: T,
    variant: LeadVariant,
    max_message_length: usize,
    timeout: Duration,
    submit_label: String,
    state: watch::Sender<FormSnapshot>,
    in_flight: AtomicBool,
}

impl<T: LeadTransport> LeadPipeline<T> {
    pub fn new(transport: T, variant: LeadVariant, config: &LeadConfig) -> Self {
        let (state, _) = watch::channel(FormSnapshot::idle(DEFAULT_SUBMIT_LABEL));
        Self {
            transport,
            variant,
            max_message_length: config.max_message_length,
            timeout: config.request_timeout(),
            submit_label: DEFAULT_SUBMIT_LABEL.to_owned(),
            state,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Label the submit control shows when idle.
    #[must_use]
    pub fn with_submit_label(mut self, label: impl Into<String>) -> Self {
        self.submit_label = label.into();
        self.state.send_replace(FormSnapshot::idle(&self.submit_label));
        self
    }

    pub fn subscribe(&self) -> watch::Receiver<FormSnapshot> {
        self.state.subscribe()
    }

    #[must_use]
    pub fn snapshot(&self) -> FormSnapshot {
        self.state.borrow().clone()
    }

    #[must_use]
    pub const fn variant(&self) -> &LeadVariant {
        &self.variant
    }

    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    fn publish(&self, phase: SubmissionPhase, status: Option<StatusMessage>) {
        self.state.send_modify(|snapshot| {
            snapshot.phase = phase;
            snapshot.status = status;
        });
    }

    /// Handles one form submission.
    ///
    /// The form is reset on success and on a honeypot hit, and left untouched otherwise. The
    /// submit control is restored when the request settles, and also when this future is
    /// dropped mid-flight.
    #[instrument(skip_all, fields(enrich = self.variant.enrich_message))]
    pub async fn submit(&self, form: &mut LeadForm) -> SubmissionOutcome {
        if self.in_flight.load(Ordering::Acquire) {
            return SubmissionOutcome::Ignored;
        }

        let copy = &self.variant.copy;

        if form.is_spam() {
            info!("Honeypot filled, suppressing submission");
            form.reset();
            self.publish(
                SubmissionPhase::Succeeded,
                Some(StatusMessage::new(copy.success.clone(), StatusTone::Success)),
            );
            return SubmissionOutcome::Suppressed;
        }

        self.publish(SubmissionPhase::Validating, None);
        if let Err(e) = validate(form, &self.variant, self.max_message_length) {
            info!(rule = %e, "Lead rejected");
            self.publish(
                SubmissionPhase::Rejected,
                Some(StatusMessage::new(copy.describe(&e), StatusTone::Error)),
            );
            return SubmissionOutcome::Rejected(e);
        }

        let Some(_guard) = SubmitGuard::engage(self) else {
            return SubmissionOutcome::Ignored;
        };
        let payload = form.to_payload(self.variant.enrich_message);

        let result = match with_timeout(self.timeout, self.transport.send(&payload)).await {
            Ok(sent) => sent,
            Err(_) => Err(TransportError::Timeout { after: self.timeout }),
        };
        drop(payload);

        match result {
            Ok(()) => {
                info!("Lead delivered");
                form.reset();
                self.publish(
                    SubmissionPhase::Succeeded,
                    Some(StatusMessage::new(copy.success.clone(), StatusTone::Success)),
                );
                SubmissionOutcome::Delivered
            },
            Err(e) => {
                warn!(cause = e.cause(), error = %e, "Lead submission failed");
                self.publish(
                    SubmissionPhase::Failed,
                    Some(StatusMessage::new(copy.failure.clone(), StatusTone::Error)),
                );
                SubmissionOutcome::Failed(e)
            },
        }
    }
}

/// Holds the submit control disabled while a request is in flight.
struct SubmitGuard<'a, T> {
    pipeline: &'a LeadPipeline<T>,
}

impl<'a, T> SubmitGuard<'a, T> {
    fn engage(pipeline: &'a LeadPipeline<T>) -> Option<Self> {
        if pipeline.in_flight.swap(true, Ordering::AcqRel) {
            return None;
        }
        let copy = &pipeline.variant.copy;
        pipeline.state.send_modify(|snapshot| {
            snapshot.phase = SubmissionPhase::Submitting;
            snapshot.status = Some(StatusMessage::new(copy.sending.clone(), StatusTone::Info));
            snapshot.submit.enabled = false;
            snapshot.submit.label = copy.busy_label.to_string();
        });
        Some(Self { pipeline })
    }
}

impl<T> Drop for SubmitGuard<'_, T> {
    fn drop(&mut self) {
        let label = &self.pipeline.submit_label;
        self.pipeline.state.send_modify(|snapshot| {
            if snapshot.phase == SubmissionPhase::Submitting {
                snapshot.phase = SubmissionPhase::Idle;
                snapshot.status = None;
            }
            snapshot.submit.enabled = true;
            snapshot.submit.label.clone_from(label);
        });
        self.pipeline.in_flight.store(false, Ordering::Release);
    }
}
