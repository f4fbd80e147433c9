//! Sequential sweep execution

use crate::error::Result;
use crate::llm::{CompletionBackend, RequestContext};
use crate::output::{NullOutput, SweepEvent, SweepOutput};
use crate::params::ParameterTuple;
use crate::sweep::ResultRecord;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Drives one completion request per tuple, strictly in order
///
/// Requests are never issued concurrently: request i+1 does not start until
/// request i has settled. A failed request becomes a failed record and the
/// sweep moves on; failure of one tuple never suppresses the others.
pub struct SweepRunner {
    backend: Arc<dyn CompletionBackend>,
    output: Box<dyn SweepOutput>,
    running: AtomicBool,
}

impl SweepRunner {
    /// Create a runner that discards progress events
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self::with_output(backend, Box::new(NullOutput))
    }

    /// Create a runner that publishes progress through the given handler
    pub fn with_output(backend: Arc<dyn CompletionBackend>, output: Box<dyn SweepOutput>) -> Self {
        Self {
            backend,
            output,
            running: AtomicBool::new(false),
        }
    }

    /// Whether a sweep is currently in flight
    ///
    /// Safe to read at any time; only the running sweep itself writes it.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Run the full sweep, one request at a time
    ///
    /// Returns one record per input tuple, in input order. The only error
    /// this returns is a missing credential, checked once before the first
    /// request; per-tuple failures are captured in the records instead.
    pub async fn run(
        &self,
        context: &RequestContext,
        tuples: Vec<ParameterTuple>,
    ) -> Result<Vec<ResultRecord>> {
        self.backend.ensure_configured()?;

        self.running.store(true, Ordering::SeqCst);
        let started = Instant::now();
        let total = tuples.len();
        tracing::debug!("starting sweep of {} combinations", total);

        let _ = self
            .output
            .emit_event(SweepEvent::SweepStarted {
                context: context.clone(),
                total,
            })
            .await;

        let mut records = Vec::with_capacity(total);
        for (index, tuple) in tuples.into_iter().enumerate() {
            let record = match self.backend.complete(context, &tuple).await {
                Ok(text) => ResultRecord::success(tuple, text),
                Err(error) => {
                    tracing::warn!("request {} of {} failed: {}", index + 1, total, error);
                    ResultRecord::failure(tuple, &error)
                }
            };

            let _ = self
                .output
                .emit_event(SweepEvent::RecordCompleted {
                    index,
                    total,
                    record: record.clone(),
                })
                .await;
            records.push(record);
        }

        let failures = records.iter().filter(|r| !r.is_success()).count();
        self.running.store(false, Ordering::SeqCst);

        let _ = self
            .output
            .emit_event(SweepEvent::SweepCompleted {
                total,
                failures,
                elapsed: started.elapsed(),
            })
            .await;
        tracing::debug!("sweep completed: {} records, {} failures", total, failures);

        Ok(records)
    }
}
