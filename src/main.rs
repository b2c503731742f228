use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use melody_corpus::config::{
    DEFAULT_CORPUS_FILE, DEFAULT_EXTENSION, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR,
};
use melody_corpus::{decode_corpus, run_batch, BatchConfig, Logger};
use melody_midi::DEFAULT_MIN_DURATION;

#[derive(Parser, Debug)]
#[command(name = "melody-corpus")]
#[command(about = "Convert MIDI melodies to a text corpus and back", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Suppress informational messages (only errors)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Show per-file and per-track detail
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode a directory of MIDI files into a corpus and regenerate MIDI (default)
    Batch(BatchArgs),
    /// Print the corpus line for a single MIDI file
    Encode {
        /// Path to the MIDI file
        midi: PathBuf,

        /// Print the melody as JSON instead of a corpus line
        #[arg(long)]
        json: bool,
    },
    /// Regenerate MIDI files from a corpus text file
    Decode {
        /// Corpus file, one melody per line
        corpus: PathBuf,

        /// Directory for output_midi_<n>.mid files
        #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
        output_dir: PathBuf,

        /// Shortest note length written, in ticks
        #[arg(long, default_value_t = DEFAULT_MIN_DURATION)]
        min_duration: u32,
    },
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// Directory of MIDI files to encode
    #[arg(short, long, default_value = DEFAULT_INPUT_DIR)]
    input_dir: PathBuf,

    /// Directory for output_midi_<n>.mid files
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Corpus file to write (overwritten)
    #[arg(short, long, default_value = DEFAULT_CORPUS_FILE)]
    corpus: PathBuf,

    /// Extension of the files to pick up
    #[arg(short, long, default_value = DEFAULT_EXTENSION)]
    extension: String,

    /// Process files in sorted name order instead of directory order
    #[arg(short, long)]
    sort: bool,

    /// Shortest note length written, in ticks
    #[arg(long, default_value_t = DEFAULT_MIN_DURATION)]
    min_duration: u32,

    /// Also write a JSON report of the run to this path
    #[arg(long)]
    report: Option<PathBuf>,
}

impl From<&BatchArgs> for BatchConfig {
    fn from(args: &BatchArgs) -> Self {
        BatchConfig {
            input_dir: args.input_dir.clone(),
            output_dir: args.output_dir.clone(),
            corpus_path: args.corpus.clone(),
            extension: args.extension.trim_start_matches('.').to_string(),
            sort_inputs: args.sort,
            min_duration: args.min_duration,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    Logger::init(Logger::level_for(cli.quiet, cli.verbose));

    match cli.command {
        None => {
            run_batch(&BatchConfig::default())?;
        }
        Some(Commands::Batch(args)) => {
            let report = run_batch(&BatchConfig::from(&args))?;
            if let Some(path) = &args.report {
                report.write_json(path)?;
                log::info!("Report saved to {}", path.display());
            }
        }
        Some(Commands::Encode { midi, json }) => {
            let melody = melody_midi::encode_file(&midi)?;
            if melody.is_empty() {
                log::warn!("No notes found in {}", midi.display());
            } else if json {
                let out = serde_json::to_string_pretty(&melody)
                    .context("Failed to serialize melody")?;
                println!("{}", out);
            } else {
                println!("{}", melody);
            }
        }
        Some(Commands::Decode {
            corpus,
            output_dir,
            min_duration,
        }) => {
            let outputs = decode_corpus(&corpus, &output_dir, min_duration)?;
            log::info!(
                "Wrote {} MIDI files to {}",
                outputs.len(),
                output_dir.display()
            );
        }
    }

    Ok(())
}
