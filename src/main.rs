use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use lyricscrub::{
    BatchReport, DiagnosticCollector, LyricsNormalizer, NormalizerConfig, discover_inputs,
    read_raw_lyrics, write_cleaned,
};

#[derive(Parser)]
#[command(name = "lyricscrub")]
#[command(author, version, about = "Clean scraped song lyrics into plain text", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean a single raw lyric file
    Clean {
        /// Raw lyric file, or - for stdin
        #[arg(short, long)]
        input: PathBuf,

        /// Write cleaned lyrics here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Normalizer config (JSON)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Clean every .txt file in a directory and report diagnostics
    Batch {
        /// Directory of raw lyric files, with an optional songs.json naming them
        #[arg(short, long)]
        input_dir: PathBuf,

        /// Directory to write cleaned lyrics into
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Write a JSON diagnostics report here
        #[arg(long)]
        report: Option<PathBuf>,

        /// Normalizer config (JSON)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Clean {
            input,
            output,
            config,
            verbose,
        } => {
            setup_logging(verbose);
            let normalizer = load_normalizer(config.as_deref())?;
            clean_file(&normalizer, &input, output.as_deref())
        }
        Commands::Batch {
            input_dir,
            output_dir,
            report,
            config,
            verbose,
        } => {
            setup_logging(verbose);
            let normalizer = load_normalizer(config.as_deref())?;
            clean_batch(&normalizer, &input_dir, output_dir.as_deref(), report.as_deref())
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn load_normalizer(config: Option<&Path>) -> Result<LyricsNormalizer> {
    let config = match config {
        Some(path) => {
            info!("Loading normalizer config from {:?}", path);
            NormalizerConfig::from_json_file(path)?
        }
        None => NormalizerConfig::default(),
    };
    Ok(LyricsNormalizer::new(config))
}

fn clean_file(normalizer: &LyricsNormalizer, input: &Path, output: Option<&Path>) -> Result<()> {
    let raw = read_raw_lyrics(input)?;
    let cleaned = normalizer.normalize(&raw);

    for diagnostic in &cleaned.diagnostics {
        warn!("{}", diagnostic);
    }

    match output {
        Some(path) => {
            std::fs::write(path, &cleaned.text)
                .with_context(|| format!("Failed to write file: {:?}", path))?;
            info!("Cleaned lyrics written to {:?}", path);
        }
        None => println!("{}", cleaned.text),
    }

    Ok(())
}

fn clean_batch(
    normalizer: &LyricsNormalizer,
    input_dir: &Path,
    output_dir: Option<&Path>,
    report_path: Option<&Path>,
) -> Result<()> {
    let inputs = discover_inputs(input_dir)?;
    info!("Cleaning {} lyric files from {:?}", inputs.len(), input_dir);

    if let Some(dir) = output_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {:?}", dir))?;
    }

    let collector = DiagnosticCollector::new();

    inputs
        .par_iter()
        .try_for_each(|input| -> Result<()> {
            let raw = read_raw_lyrics(&input.path)?;
            let text = normalizer.clean(&raw, &input.song, &collector);
            if let Some(dir) = output_dir {
                write_cleaned(dir, &input.song, &text)?;
            }
            Ok(())
        })?;

    let records = collector.into_records();
    let report = BatchReport::from_records(inputs.len(), &records);
    print!("{}", report.format());

    if let Some(path) = report_path {
        report.write_json(path)?;
        info!("Report written to {:?}", path);
    }

    info!(
        "Complete: {} songs, {} diagnostics",
        inputs.len(),
        records.len()
    );

    Ok(())
}
