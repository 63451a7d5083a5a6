//! artscan CLI - batch metadata analysis for a personal image corpus.
//!
//! artscan walks a directory tree of images, measures each file
//! (dimensions, channels, size) and reports aggregate statistics plus a
//! per-file table. A file that fails to decode is kept as a partial row
//! rather than aborting the run.
//!
//! # Usage
//!
//! ```bash
//! # Scan a directory, summary + CSV table to stdout
//! artscan scan ./art
//!
//! # Persist the table
//! artscan scan ./art --output metadata.csv
//!
//! # View configuration
//! artscan config show
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;

/// artscan - batch metadata analysis for a personal image corpus.
#[derive(Parser, Debug)]
#[command(name = "artscan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan a directory and report per-image metadata and statistics
    Scan(cli::scan::ScanArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging isn't initialized yet, so use eprintln for config warnings.
    let config = match artscan_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `artscan config path`."
            );
            artscan_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("artscan v{}", artscan_core::VERSION);

    match cli.command {
        Commands::Scan(args) => cli::scan::execute(args, &config),
        Commands::Config(args) => cli::config::execute(args),
    }
}
