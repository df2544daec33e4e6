//! pydoc-book CLI
//!
//! # Usage
//!
//! ```bash
//! # Render every listed module of ./mypkg into ./book
//! pydoc-book mypkg book
//!
//! # Parallel, with a config file, without touching the book
//! pydoc-book mypkg book --config pydoc-book.yaml --jobs 8 --dry-run -vv
//! ```
//!
//! Exit status is 1 when the inputs are missing or a source file has a
//! malformed directive block, 0 otherwise.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use pydoc_book::config::{BookConfig, ConfigFileV1, Validatable};
use pydoc_book::features::summary::ChapterIndex;
use pydoc_book::pipeline::run_batch;
use pydoc_book::shared::utils::normalize_path;

#[derive(Parser)]
#[command(name = "pydoc-book")]
#[command(about = "Render Python docstrings into mdBook chapters listed in SUMMARY.md", long_about = None)]
struct Cli {
    /// Python source root
    src: PathBuf,

    /// mdBook source directory (holds SUMMARY.md)
    out: PathBuf,

    /// YAML config file (`version: 1`)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Worker threads; implies --parallel
    #[arg(short, long)]
    jobs: Option<usize>,

    /// Render files on a thread pool
    #[arg(long)]
    parallel: bool,

    /// Render and log, but write nothing
    #[arg(long)]
    dry_run: bool,

    /// More logging (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("warn,pydoc_book={}", default_level))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn build_config(cli: &Cli) -> Result<BookConfig, String> {
    let mut config = BookConfig::new(normalize_path(&cli.src), normalize_path(&cli.out));

    if let Some(path) = &cli.config {
        let file = ConfigFileV1::from_yaml(path).map_err(|e| e.to_string())?;
        config = config.apply_file(file);
    }
    if cli.parallel {
        config = config.parallel(true);
    }
    config = config.jobs(cli.jobs).dry_run(cli.dry_run);

    config.validate().map_err(|e| e.to_string())?;
    config.check_inputs().map_err(|e| e.to_string())?;
    Ok(config)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(message) => {
            println!("{}", message);
            return ExitCode::from(1);
        }
    };

    let index = match ChapterIndex::load(&config.summary_path()) {
        Ok(index) => index,
        Err(e) => {
            error!("{}", e);
            return ExitCode::from(1);
        }
    };

    match run_batch(&config, &index) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::from(1)
        }
    }
}
