//! CLI arguments and parsing

use clap::Parser;
use std::path::PathBuf;

/// Load a payments statistics export tree into a DuckDB database
#[derive(Parser, Debug)]
#[command(name = "pulse-loader")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Root of the exported JSON tree (the directory holding `aggregated/` and `top/`)
    pub directory: PathBuf,

    /// Database file to create; must not exist yet [default: pulse.db]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Tables to load (comma-separated, empty = all)
    #[arg(short, long)]
    pub tables: Option<String>,

    /// Configuration file (YAML)
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// Rows per insert transaction
    #[arg(long)]
    pub batch_size: Option<usize>,

    /// Summary format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Summary format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One line per table
    Text,
    /// The run summary as a JSON document
    Json,
}
