//! # Lead Submission Pipeline
//!
//! Turns a submitted lead form into at most one JSON POST, and drives the status line and
//! submit control of the form while doing so.
//!
//! 1. **Honeypot**: a filled `company` field short-circuits everything. The form is reset and
//!    the success message shown, and nothing is sent.
//! 2. **Validation** ([`validation`]): required fields, then email format, then message length.
//!    The first failure is shown with the wording of the page's [`LeadVariant`].
//! 3. **Delivery** ([`LeadTransport`]): a single request raced against the configured timeout
//!    with [`df_kernel::with_timeout`]. Timeouts, network errors and non-2xx answers all show
//!    the same retry-later message and are told apart in the logs only.
//!
//! Views follow along through [`LeadPipeline::subscribe`].

mod error;
pub mod form;
pub mod pipeline;
pub mod transport;
pub mod validation;
pub mod variant;

pub use crate::error::{TransportError, TransportErrorExt};
pub use crate::form::{
    FormSnapshot, LeadForm, StatusMessage, StatusTone, SubmissionPhase, SubmitState,
};
pub use crate::pipeline::{DEFAULT_SUBMIT_LABEL, LeadPipeline, SubmissionOutcome};
pub use crate::transport::{HttpLeadTransport, LeadTransport};
pub use crate::validation::{LeadField, ValidationError, ValidationErrorExt};
pub use crate::variant::{LeadCopy, LeadVariant};
