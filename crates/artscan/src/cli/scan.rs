//! The `artscan scan` command: run the pipeline, print statistics, write
//! the table.

use clap::{Args, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use artscan_core::{Config, CorpusScanner, OutputFormat, SummaryStats, TableWriter};

/// Arguments for the `scan` command.
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Directory to scan
    #[arg(required = true)]
    pub root: PathBuf,

    /// Output file for the table (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Table format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<TableFormat>,

    /// Suppress the statistics summary
    #[arg(long)]
    pub no_summary: bool,

    /// Print the statistics summary as JSON
    #[arg(long)]
    pub stats_json: bool,
}

/// Table format choices exposed on the command line.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum TableFormat {
    Csv,
    Json,
    Jsonl,
}

impl From<TableFormat> for OutputFormat {
    fn from(format: TableFormat) -> Self {
        match format {
            TableFormat::Csv => OutputFormat::Csv,
            TableFormat::Json => OutputFormat::Json,
            TableFormat::Jsonl => OutputFormat::JsonLines,
        }
    }
}

/// Execute the scan command.
pub fn execute(args: ScanArgs, config: &Config) -> anyhow::Result<()> {
    let root = expand_user_path(&args.root);
    let format = resolve_format(&args, config)?;

    let scanner = CorpusScanner::new(config);

    let progress = create_progress_spinner();
    let mut measured: u64 = 0;
    let collection = scanner.run_with(&root, |_| {
        measured += 1;
        progress.set_message(format!("{measured} file(s) measured"));
        progress.tick();
    })?;
    progress.finish_and_clear();

    tracing::info!("Scanned {} image(s) under {:?}", collection.len(), root);
    let degraded = collection.iter().filter(|r| r.is_degraded()).count();
    if degraded > 0 {
        tracing::warn!("{} file(s) could not be decoded", degraded);
    }

    let stats = SummaryStats::from_collection(&collection);
    if args.stats_json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else if !args.no_summary {
        print!("{}", format_summary(&stats));
    }

    if let Some(output_path) = &args.output {
        let output_path = expand_user_path(output_path);
        let file = File::create(&output_path)?;
        let mut writer = TableWriter::new(BufWriter::new(file), format);
        writer.write_collection(&collection)?;
        writer.flush()?;
        tracing::info!("Table written to {:?}", output_path);
    } else {
        let stdout = std::io::stdout();
        let mut writer = TableWriter::new(stdout.lock(), format);
        writer.write_collection(&collection)?;
        writer.flush()?;
    }

    Ok(())
}

/// Expand `~` when the path is valid UTF-8; a non-UTF-8 path passes
/// through untouched rather than being lossily rewritten.
fn expand_user_path(path: &Path) -> PathBuf {
    path.to_str()
        .map(Config::expand_path)
        .unwrap_or_else(|| path.to_path_buf())
}

/// CLI flag wins over the configured default format.
fn resolve_format(args: &ScanArgs, config: &Config) -> anyhow::Result<OutputFormat> {
    match args.format {
        Some(format) => Ok(format.into()),
        None => OutputFormat::parse(&config.output.format).ok_or_else(|| {
            anyhow::anyhow!("Unknown output format in config: {:?}", config.output.format)
        }),
    }
}

/// Human-readable summary block, `n/a` where no record contributed.
fn format_summary(stats: &SummaryStats) -> String {
    let mut out = String::from("Analysis Results:\n");
    out.push_str(&format!("  total_images:  {}\n", stats.total_images));
    out.push_str(&format!("  avg_width:     {}\n", fmt_mean(stats.avg_width)));
    out.push_str(&format!("  avg_height:    {}\n", fmt_mean(stats.avg_height)));
    out.push_str(&format!("  total_size_mb: {:.2}\n", stats.total_size_mb));
    out
}

fn fmt_mean(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "n/a".to_string(),
    }
}

fn create_progress_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner
}
