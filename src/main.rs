use clap::Parser;
use tracing_subscriber::EnvFilter;

mod banner;
mod cli;
mod commands;
mod config;
mod error;
mod format;
mod prompt;
mod rpc_client;
mod rpc_types;

fn main() {
    // Initialize tracing with configurable level via RUST_LOG env var.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = cli::Cli::parse();

    let rt = tokio::runtime::Runtime::new().expect("Failed to create Tokio runtime");
    rt.block_on(async {
        if let Err(e) = cli::run(cli).await {
            format::print_error(&e.to_string(), e.hint());
            std::process::exit(1);
        }
    });
}
