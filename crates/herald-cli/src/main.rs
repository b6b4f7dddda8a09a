#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod config;
mod runner;
mod telemetry;

use std::process;

use anyhow::Context;

use crate::config::Cli;

// Tracing target constants
pub const TRACING_TARGET_STARTUP: &str = "herald_cli::startup";
pub const TRACING_TARGET_SHUTDOWN: &str = "herald_cli::shutdown";
pub const TRACING_TARGET_CONFIG: &str = "herald_cli::config";

#[tokio::main]
async fn main() {
    let Err(error) = run().await else {
        tracing::debug!(
            target: TRACING_TARGET_SHUTDOWN,
            "application terminated successfully"
        );
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET_SHUTDOWN,
            error = %format_args!("{error:#}"),
            "application terminated with error"
        );
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

/// Main application entry point.
async fn run() -> anyhow::Result<()> {
    let cli = Cli::init();

    telemetry::init_tracing(&cli.telemetry)?;
    cli.log();
    cli.validate()?;

    let store = runner::load_store(&cli.resolve.snapshot).await?;
    let resolver = runner::create_resolver(store);

    let resolved = resolver
        .resolve(&cli.resolve.command())
        .await
        .context("failed to resolve active integrations")?;

    tracing::info!(
        target: TRACING_TARGET_STARTUP,
        organization_id = %cli.resolve.organization_id,
        active = resolved.len(),
        selected = resolved.iter().filter(|r| r.selected).count(),
        "Active integrations resolved"
    );

    runner::print_output(&resolved, cli.resolve.pretty)
}
