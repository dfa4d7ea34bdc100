//! cfdump - Main entry point

use clap::Parser;
use log::{debug, info};
use std::process;

use cfdump::{collect_inventory, write_report, CfClient, Cli, Settings};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting cfdump v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: config={}, log_level={}",
        cli.config.display(),
        cli.log_level
    );

    // Load endpoint credentials; failure here is fatal
    let settings = match Settings::load(&cli.config) {
        Ok(settings) => settings,
        Err(e) => {
            println!("{}", e);
            process::exit(2);
        }
    };

    // Establish the authenticated session; failure here is fatal too
    let client = match CfClient::connect(&settings).await {
        Ok(client) => client,
        Err(e) => {
            println!("{}", e);
            process::exit(2);
        }
    };

    let rows = collect_inventory(&client).await;

    if rows.is_empty() {
        println!("Nothing to write, done.");
        return;
    }

    // Write failure is reported but does not change the exit code
    match write_report(&rows) {
        Ok(path) => info!("Report written to {}", path.display()),
        Err(e) => println!("Failed creating report file: {}", e),
    }
}
