//! Endpoint configuration for the dispatcher.

use crate::error::TriggerError;

/// Environment variable for the incident-processing endpoint URL.
const ENV_ENDPOINT_URL: &str = "TRIGGER_ENDPOINT_URL";

/// Environment variable for the endpoint API key.
const ENV_API_KEY: &str = "TRIGGER_API_KEY";

/// Static endpoint configuration, injected into the dispatcher at
/// construction. Read-only once the pipeline is built.
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// URL the payload is POSTed to.
    pub endpoint_url: String,
    /// Secret sent in the `x-api-key` header.
    pub api_key: String,
}

impl DispatchConfig {
    /// Create a configuration with explicit values.
    #[must_use]
    pub fn new(endpoint_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Read the configuration from `TRIGGER_ENDPOINT_URL` and
    /// `TRIGGER_API_KEY`.
    ///
    /// # Errors
    /// Returns [`TriggerError::NotConfigured`] naming the missing variable.
    pub fn from_env() -> Result<Self, TriggerError> {
        let endpoint_url = std::env::var(ENV_ENDPOINT_URL)
            .map_err(|_| TriggerError::NotConfigured(ENV_ENDPOINT_URL.to_string()))?;
        let api_key = std::env::var(ENV_API_KEY)
            .map_err(|_| TriggerError::NotConfigured(ENV_API_KEY.to_string()))?;

        Ok(Self {
            endpoint_url,
            api_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_from_env_reads_both_variables() {
        std::env::set_var(ENV_ENDPOINT_URL, "https://example.com/prod/incident");
        std::env::set_var(ENV_API_KEY, "sekret");

        let config = DispatchConfig::from_env().unwrap();
        assert_eq!(config.endpoint_url, "https://example.com/prod/incident");
        assert_eq!(config.api_key, "sekret");

        std::env::remove_var(ENV_ENDPOINT_URL);
        std::env::remove_var(ENV_API_KEY);
    }

    #[test]
    #[serial]
    fn test_from_env_names_missing_variable() {
        std::env::remove_var(ENV_ENDPOINT_URL);
        std::env::remove_var(ENV_API_KEY);

        let err = DispatchConfig::from_env().unwrap_err();
        assert!(matches!(err, TriggerError::NotConfigured(ref name) if name == ENV_ENDPOINT_URL));
    }
}
