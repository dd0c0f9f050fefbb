//! usage-report - Main entry point

use clap::Parser;
use log::{debug, info};
use std::process::ExitCode;

use usage_report::{run_usage_report, Cli};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting usage-report v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: org={:?}, format={:?}, api={:?}, service_labels={:?}",
        cli.org, cli.format, cli.api, cli.service_labels
    );

    match run_usage_report(&cli).await {
        Ok(()) => {
            info!("Completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            if e.is_transport() {
                debug!("Transport failure: {:?}", e);
            }
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
