//! Combination planning
//!
//! Resolves the pin-or-sweep choice for each parameter into concrete
//! candidate lists, then builds the Cartesian product as an ordered tuple
//! list. Pure: no I/O, fully deterministic for a given selection.

use crate::params::{
    ParameterSelection, ParameterTuple, ParameterValues, FREQUENCY_PENALTY_CANDIDATES,
    MAX_TOKENS_CANDIDATES, PRESENCE_PENALTY_CANDIDATES, TEMPERATURE_CANDIDATES,
};

/// Resolved per-parameter candidate lists for one sweep
///
/// Intermediate between the user's selection and the tuple list, so the
/// combination count is known before any request goes out.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateSets {
    pub temperature: Vec<f32>,
    pub max_tokens: Vec<u32>,
    pub presence_penalty: Vec<f32>,
    pub frequency_penalty: Vec<f32>,
    /// Resolved once per sweep, carried unchanged into every tuple
    pub stop_sequence: Option<String>,
}

impl CandidateSets {
    /// Resolve the selection against the candidate tables
    pub fn resolve(selection: &ParameterSelection, values: &ParameterValues) -> Self {
        Self {
            temperature: if selection.temperature {
                vec![values.temperature]
            } else {
                TEMPERATURE_CANDIDATES.to_vec()
            },
            max_tokens: if selection.max_tokens {
                vec![values.max_tokens]
            } else {
                MAX_TOKENS_CANDIDATES.to_vec()
            },
            presence_penalty: if selection.presence_penalty {
                vec![values.presence_penalty]
            } else {
                PRESENCE_PENALTY_CANDIDATES.to_vec()
            },
            frequency_penalty: if selection.frequency_penalty {
                vec![values.frequency_penalty]
            } else {
                FREQUENCY_PENALTY_CANDIDATES.to_vec()
            },
            stop_sequence: selection
                .stop_sequence
                .then(|| values.stop_sequence.clone()),
        }
    }

    /// Number of tuples the cross product will contain
    ///
    /// The stop sequence is not a factor; it is the same in every tuple.
    pub fn combination_count(&self) -> usize {
        self.temperature.len()
            * self.max_tokens.len()
            * self.presence_penalty.len()
            * self.frequency_penalty.len()
    }

    /// Build the full cross product
    ///
    /// Nesting order is fixed: temperature outermost, then max tokens, then
    /// presence penalty, then frequency penalty innermost. This determines
    /// request order and therefore result-table order. An empty candidate
    /// list yields an empty tuple list, never an error.
    pub fn tuples(&self) -> Vec<ParameterTuple> {
        let mut tuples = Vec::with_capacity(self.combination_count());

        for &temperature in &self.temperature {
            for &max_tokens in &self.max_tokens {
                for &presence_penalty in &self.presence_penalty {
                    for &frequency_penalty in &self.frequency_penalty {
                        tuples.push(ParameterTuple {
                            temperature,
                            max_tokens,
                            presence_penalty,
                            frequency_penalty,
                            stop_sequence: self.stop_sequence.clone(),
                        });
                    }
                }
            }
        }

        tuples
    }
}

/// Build the ordered tuple list for one sweep invocation
pub fn plan(selection: &ParameterSelection, values: &ParameterValues) -> Vec<ParameterTuple> {
    CandidateSets::resolve(selection, values).tuples()
}
