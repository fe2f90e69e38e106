mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "legend",
    version,
    about = "Extract plant schedules from scanned landscape legends"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// OCR legend documents and build the aggregated plant schedule
    Extract {
        /// PDF, JPG, PNG or pre-OCR'd TXT files, in upload order
        #[arg(required = true)]
        input_files: Vec<PathBuf>,

        /// Project name used in the export header and file name
        #[arg(short, long)]
        project: Option<String>,

        /// Output format: table (default), json or csv
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the export to a file (CSV, or JSON for *.json); a directory
        /// gets Plant_Schedule_<project>.csv
        #[arg(short = 'O', long = "out", value_name = "PATH")]
        out: Option<PathBuf>,

        /// Parse every document with its own heading state
        #[arg(long)]
        per_document: bool,

        /// JSON config file
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Custom genus keyword file
        #[arg(short, long, value_name = "FILE")]
        keywords: Option<PathBuf>,

        /// Category for plants without heading or keyword match
        #[arg(long, value_name = "CATEGORY")]
        fallback: Option<String>,

        /// List lines that were dropped as noise
        #[arg(long)]
        show_skipped: bool,
    },
    /// Print the raw OCR text of each document
    Ocr {
        #[arg(required = true)]
        input_files: Vec<PathBuf>,

        /// JSON config file (OCR language and resolution)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
    /// Inspect genus keyword tables
    Keywords {
        #[command(subcommand)]
        action: KeywordsAction,
    },
}

#[derive(Subcommand)]
enum KeywordsAction {
    /// List the built-in keyword table
    List,
    /// Validate a custom keyword file
    Validate {
        /// Path to JSON keyword file
        file: PathBuf,
    },
    /// Show which category a plant name falls into
    Classify {
        /// Botanical or common name
        name: String,

        /// Custom keyword file instead of the built-in table
        #[arg(short, long, value_name = "FILE")]
        keywords: Option<PathBuf>,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Extract {
            input_files,
            project,
            output,
            out,
            per_document,
            config,
            keywords,
            fallback,
            show_skipped,
        } => commands::extract::run(commands::extract::ExtractArgs {
            input_files,
            project,
            output_format: output,
            out,
            per_document,
            config,
            keywords,
            fallback,
            show_skipped,
        }),
        Commands::Ocr {
            input_files,
            config,
        } => commands::ocr::run(input_files, config),
        Commands::Keywords { action } => match action {
            KeywordsAction::List => commands::keywords::list(),
            KeywordsAction::Validate { file } => commands::keywords::validate(&file),
            KeywordsAction::Classify { name, keywords } => {
                commands::keywords::classify_name(&name, keywords.as_deref())
            }
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
