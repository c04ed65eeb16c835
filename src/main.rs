//! CLI entry point for sprint completion rate insights

use clap::Parser;
use sprint_insights::io::cli::{Cli, InsightsRunner};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> sprint_insights::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.default_log_level()));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();

    InsightsRunner::new(cli).run().map(|_| ())
}
