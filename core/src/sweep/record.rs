//! Result records produced by the sweep runner

use crate::error::RequestError;
use crate::params::ParameterTuple;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What came back for one tuple's request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordOutcome {
    /// Completion text returned by the backend
    Success { text: String },
    /// Human-readable failure description
    Failure { message: String },
}

/// One settled request: the tuple that was sent plus its outcome
///
/// Records are append-only and produced in submission order; a failed
/// request yields a record just like a successful one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultRecord {
    pub tuple: ParameterTuple,
    pub outcome: RecordOutcome,
    pub completed_at: DateTime<Utc>,
}

impl ResultRecord {
    /// Record a successful completion
    pub fn success(tuple: ParameterTuple, text: String) -> Self {
        Self {
            tuple,
            outcome: RecordOutcome::Success { text },
            completed_at: Utc::now(),
        }
    }

    /// Record a failed request
    pub fn failure(tuple: ParameterTuple, error: &RequestError) -> Self {
        Self {
            tuple,
            outcome: RecordOutcome::Failure {
                message: format!("Error: {}", error),
            },
            completed_at: Utc::now(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, RecordOutcome::Success { .. })
    }

    /// Text shown in the result column: completion text or failure message
    pub fn output_text(&self) -> &str {
        match &self.outcome {
            RecordOutcome::Success { text } => text,
            RecordOutcome::Failure { message } => message,
        }
    }

    /// Display value for the stop sequence column ("None" when absent)
    pub fn stop_display(&self) -> &str {
        self.tuple.stop_display()
    }
}
