//! # promptgrid Core
//!
//! Core library for promptgrid - a parameter-sweep harness for chat
//! completion APIs.
//!
//! Given a per-parameter choice of "pin one value" or "sweep the default
//! candidates", this library builds the cross product of parameter tuples,
//! drives one completion request per tuple in a fixed order, and collects
//! one result record per tuple whether the request succeeded or failed.

// Core modules
pub mod config;
pub mod error;
pub mod llm;
pub mod output;
pub mod params;
pub mod sweep;

// Re-export commonly used types
pub use config::{ApiConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use error::{ConfigError, Error, RequestError, Result};
pub use llm::{CompletionBackend, OpenAiChatClient, RequestContext};
pub use output::{NullOutput, SweepEvent, SweepOutput};
pub use params::{
    ParameterName, ParameterSelection, ParameterTuple, ParameterValues,
    FREQUENCY_PENALTY_CANDIDATES, MAX_TOKENS_CANDIDATES, PRESENCE_PENALTY_CANDIDATES,
    TEMPERATURE_CANDIDATES,
};
pub use sweep::{plan, CandidateSets, RecordOutcome, ResultRecord, SweepRunner};

/// Current version of the promptgrid-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing for the library
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

/// Initialize tracing with a specific debug mode
pub fn init_tracing_with_debug(debug: bool) {
    let filter = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
