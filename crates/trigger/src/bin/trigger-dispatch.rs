//! Manual trigger invocation.
//!
//! Reads an incident record snapshot as JSON (file or stdin), runs the
//! pipeline against the configured endpoint, and prints the outcome. The
//! process exits 0 whatever the outcome; the pipeline's fault boundary
//! already turned failures into log lines. Work notes are not persisted
//! because there is no record store to write to from here.

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use trigger::{
    DispatchConfig, HttpDispatcher, IncidentRecord, RecordStore, TriggerError, TriggerOutcome,
    TriggerPipeline,
};

#[derive(Parser)]
#[command(
    name = "trigger-dispatch",
    about = "Dispatch an incident record snapshot to the processing endpoint"
)]
struct Cli {
    /// Record snapshot JSON file; reads stdin when omitted.
    #[arg(long)]
    record: Option<PathBuf>,

    /// Incident-processing endpoint URL.
    #[arg(long, env = "TRIGGER_ENDPOINT_URL")]
    endpoint_url: String,

    /// API key sent in the x-api-key header.
    #[arg(long, env = "TRIGGER_API_KEY", hide_env_values = true)]
    api_key: String,
}

/// Record store for manual runs: logs the note instead of persisting it.
struct DryRunStore;

#[async_trait::async_trait]
impl RecordStore for DryRunStore {
    async fn append_work_note(&self, number: &str, note: &str) -> Result<(), TriggerError> {
        tracing::info!(incident = %number, note = %note, "Work note (dry run, not persisted)");
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let raw = match &cli.record {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read record snapshot from stdin")?;
            buf
        }
    };
    let record: IncidentRecord =
        serde_json::from_str(&raw).context("Failed to parse record snapshot")?;

    let config = DispatchConfig::new(cli.endpoint_url, cli.api_key);
    let pipeline = TriggerPipeline::new(
        Arc::new(HttpDispatcher::new(config)),
        Arc::new(DryRunStore),
    );

    match pipeline.handle(&record, None).await {
        TriggerOutcome::Annotated => println!("annotated"),
        TriggerOutcome::LoggedOnly => println!("logged-only"),
    }

    Ok(())
}
