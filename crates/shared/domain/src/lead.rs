use serde::{Deserialize, Serialize};

/// JSON body posted to the lead endpoint.
///
/// Built once per submission from trimmed form input and dropped when the request settles.
/// `company` is the honeypot and is always sent empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadPayload {
    pub name: String,
    pub email: String,
    pub message: String,
    pub lang: String,
    pub topic: String,
    pub company: String,
}
