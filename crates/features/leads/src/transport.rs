use crate::error::{TransportError, TransportErrorExt};
use df_domain::lead::LeadPayload;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use std::future::Future;
use tracing::debug;

/// Delivers one lead. Any non-2xx answer is a failure.
pub trait LeadTransport: Send + Sync {
    fn send(&self, payload: &LeadPayload) -> impl Future<Output = Result<(), TransportError>> + Send;
}

/// Posts the payload as JSON to the lead endpoint.
#[derive(Debug, Clone)]
pub struct HttpLeadTransport {
    client: Client,
    endpoint: Url,
}

impl HttpLeadTransport {
    pub fn new(endpoint: &str) -> Result<Self, TransportError> {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(client: Client, endpoint: &str) -> Result<Self, TransportError> {
        let endpoint = Url::parse(endpoint).map_err(|e| TransportError::Internal {
            message: e.to_string().into(),
            context: Some(format!("invalid lead endpoint {endpoint}").into()),
        })?;
        Ok(Self { client, endpoint })
    }

    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl LeadTransport for HttpLeadTransport {
    async fn send(&self, payload: &LeadPayload) -> Result<(), TransportError> {
        let body = serde_json::to_vec(payload)?;

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .context("posting lead")?;

        let status = response.status();
        debug!(status = status.as_u16(), "Lead endpoint answered");
        if status.is_success() { Ok(()) } else { Err(TransportError::Status { code: status.as_u16() }) }
    }
}
