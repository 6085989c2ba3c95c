use clap::Parser;
use make_labels_cli::{
    args::{normalize_legacy_flags, usage, Cli},
    config::SyncConfig,
    errors::Error,
    reporter::TerminalReporter,
    run::run,
};
use tracing::{debug, error};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_env("MAKE_LABELS_LOG"))
        .init();

    let cli = Cli::parse_from(normalize_legacy_flags(std::env::args_os()));

    let config = match SyncConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(Error::InvalidArguments(reason)) => {
            debug!(reason = %reason, "Printing usage");
            println!("{}", usage());
            return;
        }
        Err(e) => {
            error!("Error: {e}");
            std::process::exit(1);
        }
    };

    let mut reporter = TerminalReporter::stdout();
    match run(&config, &mut reporter).await {
        Ok(outcome) => {
            reporter.summary(&outcome.report);
            std::process::exit(outcome.exit_code(config.strict));
        }
        Err(e) => {
            error!("Error: {e}");
            std::process::exit(1);
        }
    }
}
