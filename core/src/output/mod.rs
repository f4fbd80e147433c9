//! Output abstraction for sweep progress
//!
//! The runner publishes each record through this interface as soon as it
//! settles, so a caller can render partial progress. Core only provides the
//! abstraction; concrete handlers live in the calling crate.

use crate::llm::RequestContext;
use crate::sweep::ResultRecord;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Events emitted during a sweep
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SweepEvent {
    /// The credential check passed and the sweep is starting
    SweepStarted {
        context: RequestContext,
        total: usize,
    },
    /// One tuple's request settled; `index` is its position in plan order
    RecordCompleted {
        index: usize,
        total: usize,
        record: ResultRecord,
    },
    /// The last tuple settled
    SweepCompleted {
        total: usize,
        failures: usize,
        elapsed: Duration,
    },
}

/// Abstract output interface for sweep execution
#[async_trait]
pub trait SweepOutput: Send + Sync {
    /// Emit a sweep event
    async fn emit_event(
        &self,
        event: SweepEvent,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// Null output handler that discards all events
pub struct NullOutput;

#[async_trait]
impl SweepOutput for NullOutput {
    async fn emit_event(
        &self,
        _event: SweepEvent,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Ok(())
    }
}
