//! Example demonstrating a sweep against a custom `CompletionBackend`
//!
//! The backend here returns canned text, so this runs without an API key.
//! Swap in `OpenAiChatClient` built from an `ApiConfig` for real requests.

use async_trait::async_trait;
use promptgrid_core::{
    plan, CompletionBackend, ConfigError, ParameterSelection, ParameterTuple, ParameterValues,
    RequestContext, RequestError, SweepRunner,
};
use std::sync::Arc;

struct EchoBackend;

#[async_trait]
impl CompletionBackend for EchoBackend {
    fn ensure_configured(&self) -> Result<(), ConfigError> {
        Ok(())
    }

    async fn complete(
        &self,
        context: &RequestContext,
        tuple: &ParameterTuple,
    ) -> Result<String, RequestError> {
        Ok(format!(
            "echo of \"{}\" at temperature {}",
            context.user_prompt, tuple.temperature
        ))
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Pin everything except temperature, which sweeps its three candidates
    let selection = ParameterSelection {
        max_tokens: true,
        presence_penalty: true,
        frequency_penalty: true,
        ..ParameterSelection::default()
    };
    let tuples = plan(&selection, &ParameterValues::default());
    println!("planned {} requests\n", tuples.len());

    let context = RequestContext::new("mock-model", "", "Describe a lamp");
    let runner = SweepRunner::new(Arc::new(EchoBackend));
    let records = runner.run(&context, tuples).await?;

    for record in &records {
        println!(
            "temperature={} max_tokens={} -> {}",
            record.tuple.temperature,
            record.tuple.max_tokens,
            record.output_text()
        );
    }

    Ok(())
}
