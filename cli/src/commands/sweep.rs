//! Parameter sweep execution command

use anyhow::Result;
use promptgrid_core::{
    CandidateSets, OpenAiChatClient, ParameterName, ParameterSelection, ParameterValues,
    RequestContext, SweepRunner,
};
use std::sync::Arc;
use tracing::{debug, info};

use crate::output::{ResultsTable, TableOutputHandler};

/// Run one request per parameter combination and print the results table
#[allow(clippy::too_many_arguments)]
pub async fn sweep_command(
    prompt: String,
    config_loader: crate::config::CliConfigLoader,
    system_prompt: String,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
    presence_penalty: Option<f32>,
    frequency_penalty: Option<f32>,
    stop: Option<String>,
    single: bool,
) -> Result<()> {
    // Load API configuration
    let api_config = config_loader.load().await?;
    info!("🤖 Using model: {}", api_config.model);

    // A given flag pins its parameter; --single pins all of them. The stop
    // sequence is only ever pinned explicitly, so --single alone still sends
    // requests without one.
    let selection = ParameterSelection {
        temperature: temperature.is_some() || single,
        max_tokens: max_tokens.is_some() || single,
        presence_penalty: presence_penalty.is_some() || single,
        frequency_penalty: frequency_penalty.is_some() || single,
        stop_sequence: stop.is_some(),
    };

    let defaults = ParameterValues::default();
    let values = ParameterValues {
        temperature: temperature.unwrap_or(defaults.temperature),
        max_tokens: max_tokens.unwrap_or(defaults.max_tokens),
        presence_penalty: presence_penalty.unwrap_or(defaults.presence_penalty),
        frequency_penalty: frequency_penalty.unwrap_or(defaults.frequency_penalty),
        stop_sequence: stop.unwrap_or_default(),
    };

    let swept: Vec<&str> = ParameterName::ALL
        .iter()
        .filter(|name| **name != ParameterName::StopSequence && !selection.pinned(**name))
        .map(|name| name.as_str())
        .collect();
    if swept.is_empty() {
        debug!("all parameters pinned, sending a single request");
    } else {
        debug!("sweeping parameters: {}", swept.join(", "));
    }

    let sets = CandidateSets::resolve(&selection, &values);
    debug!("{} combinations to evaluate", sets.combination_count());
    let tuples = sets.tuples();

    // Build the request context and backend
    let context = RequestContext::new(api_config.model.clone(), system_prompt, prompt);
    let backend = OpenAiChatClient::new(api_config)?;
    let runner = SweepRunner::with_output(Arc::new(backend), Box::new(TableOutputHandler::new()));

    let records = runner.run(&context, tuples).await?;

    if records.is_empty() {
        println!("No combinations to evaluate.");
        return Ok(());
    }

    println!("{}", ResultsTable::new(&records).render());

    Ok(())
}
