//! Error types for the trigger pipeline.

use thiserror::Error;

/// Errors that can occur between extraction and annotation.
///
/// None of these escape the pipeline boundary; `TriggerPipeline::handle`
/// converts every variant into a logged `LoggedOnly` outcome.
#[derive(Debug, Error)]
pub enum TriggerError {
    /// HTTP transport failed (connect error, timeout, broken response)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Payload serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Endpoint or API key configuration is missing
    #[error("Not configured: {0}")]
    NotConfigured(String),

    /// The record store rejected the work-note update
    #[error("Record store update failed: {0}")]
    Store(String),
}
