//! # promptgrid CLI
//!
//! Command-line interface for promptgrid - a parameter-sweep harness for
//! chat completion APIs.
//!
//! ## Usage
//!
//! - `promptgrid "prompt"` - Sweep every default candidate combination
//! - `promptgrid "prompt" --temperature 0.9` - Pin a parameter, sweep the rest
//! - `promptgrid "prompt" --single` - Send exactly one request
//! - `promptgrid params` - Show sweepable parameters and their candidates
//!
//! A flag left off means that parameter is swept across its default
//! candidates; a flag given pins it to that value.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod output;

use commands::{params_command, sweep_command};
use config::CliConfigLoader;

/// promptgrid - a parameter-sweep harness for chat completion APIs
#[derive(Parser)]
#[command(name = "promptgrid")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compare chat completions across generation parameter combinations")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file or directory path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// API key override
    #[arg(long)]
    api_key: Option<String>,

    /// Base URL override
    #[arg(long)]
    base_url: Option<String>,

    /// Model identifier [default: gpt-3.5-turbo]
    #[arg(short, long)]
    model: Option<String>,

    /// System prompt sent ahead of the user prompt (no system message when empty)
    #[arg(short = 's', long, default_value = "")]
    system_prompt: String,

    /// Pin temperature instead of sweeping [0, 0.7, 1.2]
    #[arg(short = 't', long)]
    temperature: Option<f32>,

    /// Pin max tokens instead of sweeping [50, 150, 300]
    #[arg(long)]
    max_tokens: Option<u32>,

    /// Pin presence penalty instead of sweeping [0, 1.5]
    #[arg(long)]
    presence_penalty: Option<f32>,

    /// Pin frequency penalty instead of sweeping [0, 1.5]
    #[arg(long)]
    frequency_penalty: Option<f32>,

    /// Stop sequence attached to every request (absent unless set)
    #[arg(long)]
    stop: Option<String>,

    /// Send a single request with the configured values instead of sweeping
    #[arg(long)]
    single: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// The user prompt to evaluate
    prompt: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show sweepable parameters and their default candidates
    Params,
}

impl Cli {
    /// Configuration loader carrying this invocation's override flags
    fn config_loader(&self) -> CliConfigLoader {
        let mut loader = CliConfigLoader::new();
        if let Some(path) = &self.config {
            loader = loader.with_config_override(path.clone());
        }
        if let Some(api_key) = &self.api_key {
            loader = loader.with_api_key_override(api_key.clone());
        }
        if let Some(base_url) = &self.base_url {
            loader = loader.with_base_url_override(base_url.clone());
        }
        if let Some(model) = &self.model {
            loader = loader.with_model_override(model.clone());
        }
        loader
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    promptgrid_core::init_tracing_with_debug(cli.verbose);

    let config_loader = cli.config_loader();

    match (cli.prompt, cli.command) {
        // If a prompt is provided, run the sweep
        (Some(prompt), None) => {
            sweep_command(
                prompt,
                config_loader,
                cli.system_prompt,
                cli.temperature,
                cli.max_tokens,
                cli.presence_penalty,
                cli.frequency_penalty,
                cli.stop,
                cli.single,
            )
            .await
        }
        // If a prompt is provided with a subcommand, that's an error
        (Some(_), Some(_)) => {
            tracing::error!("Error: Cannot specify both a prompt and a subcommand");
            std::process::exit(1);
        }
        // Handle subcommands
        (None, Some(Commands::Params)) => params_command().await,
        // Nothing to do without a prompt
        (None, None) => {
            anyhow::bail!("No prompt given. Usage: promptgrid \"<prompt>\" [options]")
        }
    }
}
