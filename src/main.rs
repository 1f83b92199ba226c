use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod catalog;
mod cli;
mod config;
mod error;
mod export;
mod media;
mod plan;
mod session;
mod tui;
mod wizard;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing - only show logs with --verbose
    let filter = if cli.verbose {
        EnvFilter::new("smorg=debug")
    } else {
        EnvFilter::new("smorg=warn")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Wizard(args) => cli::wizard::execute(args),
        Commands::Catalog(args) => cli::catalog::execute(args),
        Commands::Export(args) => cli::export::execute(args),
        Commands::Schema => cli::schema::execute(),
    }
}
