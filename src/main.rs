use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use transcript_fixer::{BatchConfig, InspectStatus, inspect_batch, run_batch};

#[derive(Parser)]
#[command(name = "transcript-fixer")]
#[command(author, version, about = "Normalize transcript CSV exports to timestamp,speaker,words", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    batch: BatchArgs,

    /// Write a JSON report of the run to this file
    #[arg(long)]
    report: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show what fixing would do without modifying any file
    Check,
}

// Global so the options apply whether given before or after `check`
#[derive(Args, Clone)]
struct BatchArgs {
    /// Repository root containing _data/transcripts
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Transcript file name to process (repeatable, replaces the built-in list)
    #[arg(long = "file", global = true)]
    files: Vec<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

impl BatchArgs {
    fn config(&self) -> BatchConfig {
        BatchConfig::from_root(&self.root).with_files(self.files.clone())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.batch.verbose);
    let config = cli.batch.config();

    match cli.command {
        Some(Commands::Check) => {
            if cli.report.is_some() {
                bail!("--report only applies when fixing; `check` never writes a report");
            }
            check_transcripts(&config);
            Ok(())
        }
        None => fix_transcripts(&config, cli.report),
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn fix_transcripts(config: &BatchConfig, report_path: Option<PathBuf>) -> Result<()> {
    info!("Fixing transcripts in {:?}", config.transcript_dir);
    let report = run_batch(config);

    if report.failed_count() > 0 || report.missing_count() > 0 {
        info!(
            "{} fixed, {} missing, {} failed, {} rows written",
            report.fixed_count(),
            report.missing_count(),
            report.failed_count(),
            report.rows_written()
        );
    }

    if let Some(path) = report_path {
        report
            .write_json(&path)
            .with_context(|| format!("Failed to write report to {:?}", path))?;
        info!("Report written to {:?}", path);
    }

    Ok(())
}

fn check_transcripts(config: &BatchConfig) {
    println!("Transcript Check");
    println!("================");
    println!("Directory: {}", config.transcript_dir.display());

    for (name, status) in inspect_batch(config) {
        println!();
        println!("{}", name);
        println!("{}", "-".repeat(name.len()));
        match status {
            InspectStatus::Ready(t) => {
                println!("Delimiter: {}", t.delimiter);
                println!("Headers: {:?}", t.headers);
                println!("timestamp <- {}", t.sources.timestamp.unwrap_or("(none)"));
                println!("speaker   <- {}", t.sources.speaker.unwrap_or("(none)"));
                println!("words     <- {}", t.sources.words.unwrap_or("(none)"));
                println!(
                    "Rows: {} in, {} kept, {} dropped",
                    t.input_rows(),
                    t.rows.len(),
                    t.dropped
                );
            }
            InspectStatus::Empty => println!("Empty file, would be left untouched"),
            InspectStatus::Missing => println!("Not found"),
            InspectStatus::Failed(error) => println!("Error: {}", error),
        }
    }
}
