//! Corpus CLI - Command-line tool for verifying speech-emotion corpus datasets
//!
//! The binary is named `corpus-cli` to avoid conflicts with the `emocorpus`
//! library crate.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use std::io;
use std::sync::OnceLock;

mod commands;
mod config;
mod output;

// Global context for commands to access
pub static GLOBAL_OPTS: OnceLock<GlobalOptions> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct GlobalOptions {
    pub output: OutputFormat,
    pub verbose: u8,
    pub quiet: bool,
    pub no_color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum CorpusArg {
    Iemocap,
    Meld,
    Union,
}

#[derive(Parser)]
#[command(
    name = "corpus-cli",
    about = "Command-line tool for verifying speech-emotion corpus datasets",
    long_about = None,
    after_help = "EXAMPLES:
    # Verify an IEMOCAP manifest
    corpus-cli verify iemocap iemocap.csv

    # Verify IEMOCAP including the dataset folder
    corpus-cli verify iemocap iemocap.csv --audio-dir data/iemocap

    # Verify the MELD splits and combined table
    corpus-cli verify meld --train train.csv --dev dev.csv --test test.csv \\
        --combined meld.csv --audio-dir data/meld

    # Verify the merged union dataset
    corpus-cli verify union --combined union.csv --iemocap iemocap.csv \\
        --meld meld.csv --train train.csv --validation val.csv --test test.csv

    # Summarize a manifest
    corpus-cli info union.csv

    # Show the expected schema for a corpus
    corpus-cli schema meld

    # Generate shell completions
    corpus-cli completion bash > ~/.bash_completion.d/corpus-cli.bash"
)]
#[command(version)]
struct Cli {
    /// Output format (defaults to the config file's default_output, then text)
    #[arg(global = true, short = 'o', long, value_enum)]
    output: Option<OutputFormat>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(global = true, short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(global = true, short = 'q', long, conflicts_with = "verbose")]
    quiet: bool,

    /// Disable colored output
    #[arg(global = true, long)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify a dataset against its structural profile
    #[command(subcommand)]
    Verify(VerifyCommands),
    /// Summarize a manifest: shape, dtypes, null and distinct counts
    Info {
        /// Path to the CSV manifest
        manifest: String,
    },
    /// Show the expected schema and constants for a corpus
    Schema {
        /// Which corpus profile to show
        #[arg(value_enum)]
        corpus: CorpusArg,
    },
    /// Generate shell completion scripts
    #[command(about = "Generate completion scripts for your shell")]
    Completion {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum VerifyCommands {
    /// Verify an IEMOCAP manifest
    Iemocap {
        /// Path to the IEMOCAP CSV manifest
        manifest: String,
        /// Dataset folder (checked for existence)
        #[arg(long)]
        audio_dir: Option<String>,
    },
    /// Verify the MELD splits and combined table
    Meld {
        /// Train split manifest
        #[arg(long)]
        train: String,
        /// Dev split manifest
        #[arg(long)]
        dev: String,
        /// Test split manifest
        #[arg(long)]
        test: String,
        /// Combined manifest (all splits, with Data and filepath)
        #[arg(long)]
        combined: String,
        /// Audio folder; its recursive .wav count must match the combined rows
        #[arg(long)]
        audio_dir: Option<String>,
    },
    /// Verify the merged union dataset and its splits
    Union {
        /// Merged manifest
        #[arg(long)]
        combined: String,
        /// IEMOCAP source manifest
        #[arg(long)]
        iemocap: String,
        /// MELD source manifest (combined over its splits)
        #[arg(long)]
        meld: String,
        /// Train split manifest
        #[arg(long)]
        train: String,
        /// Validation split manifest
        #[arg(long)]
        validation: String,
        /// Test split manifest
        #[arg(long)]
        test: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = config::load_config(None).unwrap_or_default();

    // Flag beats config file beats built-in default
    let output = cli
        .output
        .or_else(|| {
            config
                .default_output
                .as_deref()
                .and_then(|s| OutputFormat::from_str(s, true).ok())
        })
        .unwrap_or(OutputFormat::Text);

    // Set up colored output based on flags
    if cli.no_color || output != OutputFormat::Text {
        colored::control::set_override(false);
    }

    // Configure logging based on verbosity
    let log_level = match (cli.quiet, cli.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    let global_opts = GlobalOptions {
        output,
        verbose: cli.verbose,
        quiet: cli.quiet,
        no_color: cli.no_color,
    };

    GLOBAL_OPTS
        .set(global_opts)
        .expect("Failed to set global options");

    log::debug!("output format: {:?}", output);

    match cli.command {
        Commands::Verify(verify_cmd) => match verify_cmd {
            VerifyCommands::Iemocap { manifest, audio_dir } => {
                commands::verify::iemocap(&config, &manifest, audio_dir.as_deref())?;
            }
            VerifyCommands::Meld {
                train,
                dev,
                test,
                combined,
                audio_dir,
            } => {
                commands::verify::meld(
                    &config,
                    &train,
                    &dev,
                    &test,
                    &combined,
                    audio_dir.as_deref(),
                )?;
            }
            VerifyCommands::Union {
                combined,
                iemocap,
                meld,
                train,
                validation,
                test,
            } => {
                commands::verify::union(
                    &config,
                    &combined,
                    &iemocap,
                    &meld,
                    &train,
                    &validation,
                    &test,
                )?;
            }
        },
        Commands::Info { manifest } => {
            commands::info::info(&config, &manifest)?;
        }
        Commands::Schema { corpus } => {
            commands::schema::schema(corpus)?;
        }
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut io::stdout());
        }
    }

    Ok(())
}
