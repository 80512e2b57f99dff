//! CLI argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docsect")]
#[command(
    author,
    version,
    about = "Split documents into retrieval-sized sections"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Segment a single document and print its sections
    Split(SplitArgs),

    /// Segment every supported document under a directory
    Scan(ScanArgs),
}

#[derive(Args)]
pub struct SplitArgs {
    /// Document to segment
    pub file: PathBuf,

    /// Print derived section titles only, without bodies
    #[arg(long)]
    pub titles_only: bool,
}

#[derive(Args)]
pub struct ScanArgs {
    /// Directory to scan
    pub dir: PathBuf,

    /// Glob filter on relative paths (e.g. "docs/**/*.md")
    #[arg(long)]
    pub pattern: Option<String>,

    /// Extensions to include, without dots (defaults to txt md py json pdf)
    #[arg(long, value_delimiter = ',')]
    pub extensions: Option<Vec<String>>,

    /// Print full sections for every file instead of per-file counts
    #[arg(long)]
    pub full: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal output
    Cli,
    /// JSON array of section records
    Json,
    /// Markdown document
    Md,
}
