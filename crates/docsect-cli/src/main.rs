//! Docsect CLI
//!
//! Split documents into retrieval-sized sections from the command line.

use clap::Parser;

mod app;
mod commands;
mod output;

use app::{Cli, Commands};

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Split(args) => commands::split::run(args, cli.format),
        Commands::Scan(args) => commands::scan::run(args, cli.format, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(e.exit_code());
    }
}
