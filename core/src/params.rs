//! Generation parameter model
//!
//! The parameter set is closed: five named parameters, each either pinned to
//! a single configured value or swept across a fixed candidate table. Keeping
//! them as plain struct fields (rather than a dynamic map) makes the set
//! exhaustively checkable at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Candidate values swept when temperature is not pinned
pub const TEMPERATURE_CANDIDATES: [f32; 3] = [0.0, 0.7, 1.2];

/// Candidate values swept when max tokens is not pinned
pub const MAX_TOKENS_CANDIDATES: [u32; 3] = [50, 150, 300];

/// Candidate values swept when presence penalty is not pinned
pub const PRESENCE_PENALTY_CANDIDATES: [f32; 2] = [0.0, 1.5];

/// Candidate values swept when frequency penalty is not pinned
pub const FREQUENCY_PENALTY_CANDIDATES: [f32; 2] = [0.0, 1.5];

/// The tunable generation parameters
///
/// The stop sequence has no candidate table: unpinned it is simply absent,
/// so it never multiplies the combination count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterName {
    Temperature,
    MaxTokens,
    PresencePenalty,
    FrequencyPenalty,
    StopSequence,
}

impl ParameterName {
    /// All parameters, in sweep nesting order (stop sequence last)
    pub const ALL: [ParameterName; 5] = [
        ParameterName::Temperature,
        ParameterName::MaxTokens,
        ParameterName::PresencePenalty,
        ParameterName::FrequencyPenalty,
        ParameterName::StopSequence,
    ];

    /// Get the parameter name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterName::Temperature => "temperature",
            ParameterName::MaxTokens => "max_tokens",
            ParameterName::PresencePenalty => "presence_penalty",
            ParameterName::FrequencyPenalty => "frequency_penalty",
            ParameterName::StopSequence => "stop_sequence",
        }
    }

    /// Human-readable label used in table headers and listings
    pub fn label(&self) -> &'static str {
        match self {
            ParameterName::Temperature => "Temperature",
            ParameterName::MaxTokens => "Max Tokens",
            ParameterName::PresencePenalty => "Presence Penalty",
            ParameterName::FrequencyPenalty => "Frequency Penalty",
            ParameterName::StopSequence => "Stop Sequence",
        }
    }
}

impl fmt::Display for ParameterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ParameterName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "temperature" => Ok(ParameterName::Temperature),
            "max_tokens" => Ok(ParameterName::MaxTokens),
            "presence_penalty" => Ok(ParameterName::PresencePenalty),
            "frequency_penalty" => Ok(ParameterName::FrequencyPenalty),
            "stop_sequence" => Ok(ParameterName::StopSequence),
            other => Err(format!("Unknown parameter: {}", other)),
        }
    }
}

/// Which parameters are pinned to their configured value
///
/// A pinned numeric parameter contributes exactly its configured value to
/// the sweep; unpinned it contributes its full candidate table. The stop
/// sequence is degenerate: unpinned means absent, never swept.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ParameterSelection {
    pub temperature: bool,
    pub max_tokens: bool,
    pub presence_penalty: bool,
    pub frequency_penalty: bool,
    pub stop_sequence: bool,
}

impl ParameterSelection {
    /// Every parameter pinned, for single-request mode
    pub fn all_pinned() -> Self {
        Self {
            temperature: true,
            max_tokens: true,
            presence_penalty: true,
            frequency_penalty: true,
            stop_sequence: true,
        }
    }

    /// Whether the given parameter is pinned
    pub fn pinned(&self, name: ParameterName) -> bool {
        match name {
            ParameterName::Temperature => self.temperature,
            ParameterName::MaxTokens => self.max_tokens,
            ParameterName::PresencePenalty => self.presence_penalty,
            ParameterName::FrequencyPenalty => self.frequency_penalty,
            ParameterName::StopSequence => self.stop_sequence,
        }
    }
}

/// Currently configured scalar value for each parameter
///
/// Only consulted for pinned parameters; unpinned numerics sweep their
/// candidate tables instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterValues {
    pub temperature: f32,
    pub max_tokens: u32,
    pub presence_penalty: f32,
    pub frequency_penalty: f32,
    pub stop_sequence: String,
}

impl Default for ParameterValues {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 150,
            presence_penalty: 0.0,
            frequency_penalty: 0.0,
            stop_sequence: String::new(),
        }
    }
}

/// One concrete parameter assignment, submitted as a single request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterTuple {
    pub temperature: f32,
    pub max_tokens: u32,
    pub presence_penalty: f32,
    pub frequency_penalty: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_sequence: Option<String>,
}

impl ParameterTuple {
    /// Display value for the stop sequence column ("None" when absent)
    pub fn stop_display(&self) -> &str {
        self.stop_sequence.as_deref().unwrap_or("None")
    }
}
