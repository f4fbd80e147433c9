//! Parameter listing command

use anyhow::Result;
use promptgrid_core::{
    ParameterName, ParameterValues, DEFAULT_MODEL, FREQUENCY_PENALTY_CANDIDATES,
    MAX_TOKENS_CANDIDATES, PRESENCE_PENALTY_CANDIDATES, TEMPERATURE_CANDIDATES,
};
use tracing::info;

/// Show sweepable parameters, their pinned defaults and candidate tables
pub async fn params_command() -> Result<()> {
    info!("Listing sweepable parameters");

    println!("🎛️  Sweepable Parameters\n");

    let defaults = ParameterValues::default();
    for name in ParameterName::ALL {
        println!("📦 {} ({})", name.label(), name);
        match name {
            ParameterName::Temperature => {
                println!("   pinned default: {}", defaults.temperature);
                println!("   sweep candidates: {:?}\n", TEMPERATURE_CANDIDATES);
            }
            ParameterName::MaxTokens => {
                println!("   pinned default: {}", defaults.max_tokens);
                println!("   sweep candidates: {:?}\n", MAX_TOKENS_CANDIDATES);
            }
            ParameterName::PresencePenalty => {
                println!("   pinned default: {}", defaults.presence_penalty);
                println!("   sweep candidates: {:?}\n", PRESENCE_PENALTY_CANDIDATES);
            }
            ParameterName::FrequencyPenalty => {
                println!("   pinned default: {}", defaults.frequency_penalty);
                println!("   sweep candidates: {:?}\n", FREQUENCY_PENALTY_CANDIDATES);
            }
            ParameterName::StopSequence => {
                println!("   no candidate table; omitted from requests unless pinned\n");
            }
        }
    }

    println!("💡 Pass a flag (e.g. --temperature 0.9) to pin a parameter; leave it off to sweep.");
    println!("📋 Default model: {}", DEFAULT_MODEL);

    Ok(())
}
