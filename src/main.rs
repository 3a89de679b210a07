use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod comments;
mod config;
mod error;
mod output;
mod review;
mod table;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Only show debug logs with --verbose
    let filter = if cli.verbose {
        EnvFilter::new("docreview=debug")
    } else {
        EnvFilter::new("docreview=warn")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Status(args) => cli::status::execute(args),
        Commands::Check(args) => cli::check::execute(args),
        Commands::Sync(args) => cli::sync::execute(args),
        Commands::Init(args) => cli::init::execute(args),
        Commands::Schema => cli::schema::execute(),
    }
}
