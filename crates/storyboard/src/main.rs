//! Storyboard CLI binary.
//!
//! This binary provides command-line access to the storyboard pipeline:
//! - Generate a storyboard from a script and export it
//! - Estimate the scene count of a script offline
//! - List style presets and directing tags

use clap::Parser;
use storyboard::{ObservabilityConfig, init_observability_with_config};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, list_presets, run_estimate, run_generate};

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose { "debug" } else { "info" };
    init_observability_with_config(
        ObservabilityConfig::new()
            .with_log_level(log_level)
            .with_json_logs(cli.json_logs),
    )
    .map_err(|e| e as Box<dyn std::error::Error>)?;

    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "No .env file loaded");
    }

    // Execute the requested command
    match cli.command {
        Commands::Generate(args) => {
            run_generate(args).await?;
        }

        Commands::Estimate {
            script,
            detail,
            scenes,
        } => {
            run_estimate(&script, &detail, scenes)?;
        }

        Commands::Presets => {
            list_presets();
        }
    }

    Ok(())
}
