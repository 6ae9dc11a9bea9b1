//! diskmeter — per-directory disk usage analyser.
//!
//! Thin binary entry point. All logic lives in the `diskmeter-core`
//! and `diskmeter-cli` crates.

use clap::Parser;

fn main() -> anyhow::Result<()> {
    // Initialise structured logging. RUST_LOG overrides the default level
    // so per-entry drop warnings can be silenced or walker diagnostics
    // turned on without a rebuild.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    tracing::info!("diskmeter starting");

    let args = diskmeter_cli::args::CliArgs::parse();
    diskmeter_cli::run(args)
}
