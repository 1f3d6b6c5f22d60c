//! `lb-inventory` entry point
//!
//! Report lines go to stdout, diagnostics (`RUST_LOG`, default `warn`) to stderr.

use std::process::ExitCode;

use lb_inventory::{Printer, app, config};
use lb_inventory_provider::create_provider;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing to stderr (stdout carries the report)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_ansi(false),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let mut printer = Printer::stdout();
    let result = app::execute(
        config::env_lookup,
        |config| create_provider(config.credentials.clone()),
        &mut printer,
    )
    .await;

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::info!("inventory aborted: {e}");
            ExitCode::FAILURE
        }
    }
}
