use clap::Parser;
use tracing_subscriber::EnvFilter;

use star_log_stats::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // RUST_LOG overrides the default of reporting progress at info level
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("star_log_stats=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    cli::run(cli)
}
