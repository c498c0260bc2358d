//! Outbound HTTP dispatch to the incident-processing endpoint.

use async_trait::async_trait;
use tracing::debug;

use crate::config::DispatchConfig;
use crate::error::TriggerError;
use crate::payload::DispatchPayload;

/// Header carrying the endpoint API key.
const API_KEY_HEADER: &str = "x-api-key";

/// Status code and body of the single HTTP round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult {
    pub status_code: u16,
    pub body: String,
}

impl DispatchResult {
    /// Whether the endpoint accepted the incident for processing.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self.status_code, 200 | 202)
    }
}

/// Trait for forwarding a payload to the processing endpoint.
///
/// Exactly one dispatch attempt per invocation: no retry, no timeout
/// override beyond the client default.
#[async_trait]
pub trait Dispatcher: Send + Sync {
    /// Perform one dispatch attempt.
    ///
    /// Any received response is `Ok`, whatever its status value; status
    /// interpretation belongs to the caller. Only transport failures
    /// (connect error, timeout, broken response) are `Err`.
    async fn dispatch(&self, payload: &DispatchPayload) -> Result<DispatchResult, TriggerError>;
}

/// Production dispatcher backed by `reqwest`.
pub struct HttpDispatcher {
    config: DispatchConfig,
    client: reqwest::Client,
}

impl HttpDispatcher {
    /// Create a dispatcher for the configured endpoint.
    #[must_use]
    pub fn new(config: DispatchConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Dispatcher for HttpDispatcher {
    async fn dispatch(&self, payload: &DispatchPayload) -> Result<DispatchResult, TriggerError> {
        debug!(
            endpoint = %self.config.endpoint_url,
            incident = %payload.incident_id,
            "Dispatching incident"
        );

        let response = self
            .client
            .post(&self.config.endpoint_url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(payload)
            .send()
            .await?;

        let status_code = response.status().as_u16();
        let body = response.text().await?;

        Ok(DispatchResult { status_code, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_classification() {
        for code in [200u16, 202] {
            let result = DispatchResult {
                status_code: code,
                body: String::new(),
            };
            assert!(result.is_success(), "{code} is a success");
        }
        for code in [201u16, 204, 301, 400, 403, 500, 503] {
            let result = DispatchResult {
                status_code: code,
                body: String::new(),
            };
            assert!(!result.is_success(), "{code} is a failure");
        }
    }
}
