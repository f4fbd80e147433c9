//! Completion backend trait and request context

use crate::error::{ConfigError, RequestError};
use crate::params::ParameterTuple;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Immutable per-sweep request data, shared read-only by every tuple
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// Model identifier passed through to the completion API
    pub model: String,

    /// System prompt; an empty string means no system message is sent
    pub system_prompt: String,

    /// User prompt
    pub user_prompt: String,
}

impl RequestContext {
    pub fn new(
        model: impl Into<String>,
        system_prompt: impl Into<String>,
        user_prompt: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            system_prompt: system_prompt.into(),
            user_prompt: user_prompt.into(),
        }
    }
}

/// Trait for completion backends
///
/// The sweep runner treats this as an opaque capability: one round trip per
/// call, no retry, no timeout of its own.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Check that a credential is configured
    ///
    /// Called once per sweep, before any request goes out.
    fn ensure_configured(&self) -> Result<(), ConfigError>;

    /// Send one completion request and return its text
    async fn complete(
        &self,
        context: &RequestContext,
        tuple: &ParameterTuple,
    ) -> Result<String, RequestError>;
}
