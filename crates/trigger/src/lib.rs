//! Incident record-change trigger.
//!
//! When the record store fires a create/update event for an incident-like
//! record, this crate derives structured data from the record's free-text
//! description, forwards it to an external incident-processing endpoint as
//! JSON, and on acceptance writes a work note back onto the record.
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use trigger::{DispatchConfig, HttpDispatcher, TriggerPipeline};
//!
//! # async fn run(store: Arc<dyn trigger::RecordStore>, record: trigger::IncidentRecord) {
//! let config = DispatchConfig::from_env().unwrap();
//! let pipeline = TriggerPipeline::new(Arc::new(HttpDispatcher::new(config)), store);
//!
//! // One invocation per lifecycle event; never fails.
//! let outcome = pipeline.handle(&record, None).await;
//! # }
//! ```
//!
//! # Architecture
//!
//! Control flow is strictly linear within one invocation:
//! extract → build payload → dispatch → record outcome. Two seams exist
//! for substitution in tests:
//!
//! - [`Dispatcher`] performs the single outbound HTTP call
//! - [`RecordStore`] persists the one work-note mutation
//!
//! Every invocation terminates in one of two states: the record was
//! annotated, or the failure was logged. Nothing is retried and no error
//! propagates to the triggering transaction.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod dispatch;
pub mod error;
pub mod extract;
pub mod payload;
pub mod record;

pub use config::DispatchConfig;
pub use dispatch::{DispatchResult, Dispatcher, HttpDispatcher};
pub use error::TriggerError;
pub use extract::ExtractedInfo;
pub use payload::DispatchPayload;
pub use record::{IncidentRecord, RecordStore};

use std::sync::Arc;

use tracing::{error, info};

/// Work note written to the record when the endpoint accepts the dispatch.
pub const WORK_NOTE: &str = "Automated incident processing initiated via AgentCore agents.";

/// Terminal outcome of one trigger invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// Dispatch was accepted and the work note was written back.
    Annotated,
    /// Dispatch was rejected or a stage failed; nothing was written.
    LoggedOnly,
}

/// The trigger pipeline: extract → build → dispatch → record.
///
/// `handle` is the fault boundary for the whole system: it never returns
/// an error and never panics on bad input, so the record store's
/// triggering transaction is never blocked from here.
pub struct TriggerPipeline {
    dispatcher: Arc<dyn Dispatcher>,
    store: Arc<dyn RecordStore>,
}

impl TriggerPipeline {
    /// Create a pipeline over a dispatcher and a record store.
    #[must_use]
    pub fn new(dispatcher: Arc<dyn Dispatcher>, store: Arc<dyn RecordStore>) -> Self {
        Self { dispatcher, store }
    }

    /// Run the pipeline for one record-change event.
    ///
    /// The record store passes current and previous snapshots; only the
    /// current one is read. Any stage error is logged with its message and
    /// debug trace, then swallowed into [`TriggerOutcome::LoggedOnly`].
    pub async fn handle(
        &self,
        current: &IncidentRecord,
        _previous: Option<&IncidentRecord>,
    ) -> TriggerOutcome {
        match self.try_handle(current).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(
                    incident = %current.number,
                    error = %e,
                    trace = ?e,
                    "Trigger pipeline failed"
                );
                TriggerOutcome::LoggedOnly
            }
        }
    }

    async fn try_handle(&self, current: &IncidentRecord) -> Result<TriggerOutcome, TriggerError> {
        let extracted = extract::extract(current);
        let payload = payload::build(current, &extracted);

        let result = self.dispatcher.dispatch(&payload).await?;

        // Summary line, independent of the outcome branch.
        info!(
            incident = %current.number,
            status = result.status_code,
            server = %extracted.server_name,
            "Incident dispatched"
        );

        if result.is_success() {
            self.store
                .append_work_note(&current.number, WORK_NOTE)
                .await?;
            Ok(TriggerOutcome::Annotated)
        } else {
            error!(
                incident = %current.number,
                status = result.status_code,
                body = %result.body,
                "Incident dispatch rejected"
            );
            Ok(TriggerOutcome::LoggedOnly)
        }
    }
}
