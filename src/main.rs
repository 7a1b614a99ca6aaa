use clap::Parser;
use std::path::Path;

mod cli;
mod api;
mod core;
mod error;
mod models;
mod generators;
mod strength;
mod logging;

use crate::cli::{Args, CliCommand};
use crate::cli::handlers::{handle_generate, memorable_request, print_results, random_request};
use crate::core::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    let mut config = Config::load();
    if let Some(port) = args.port {
        config.web_port = port;
    }
    if let Some(address) = &args.address {
        config.web_address = address.clone();
    }

    logging::init(&config)?;
    for warning in &config.load_warnings {
        log::warn!("{}", warning);
    }
    log::debug!("Loaded config: {:?}", config);

    match args.command.unwrap_or(CliCommand::Serve) {
        CliCommand::Serve => {
            log::info!("🛡 Starting Aegis Pass");
            api::start_server(config).await.map_err(|e| {
                log::error!("API server failed: {}", e);
                e
            })?;
            log::info!("✅ Aegis Pass shutdown complete.");
        }
        CliCommand::Random {
            length,
            no_upper,
            no_lower,
            no_digits,
            no_special,
            exclude_similar,
            count,
        } => {
            let request = random_request(
                &config, length, no_upper, no_lower, no_digits, no_special, exclude_similar,
            );
            let results = handle_generate(&config, &request, count)?;
            print_results(&results);
        }
        CliCommand::Memorable { words, separator, count } => {
            let request = memorable_request(&config, words, separator);
            let results = handle_generate(&config, &request, count)?;
            print_results(&results);
        }
        CliCommand::Interactive => cli::menu::run_interactive(&config)?,
    }

    Ok(())
}
