//! Command line argument parsing for the phrasefind CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// phrasefind - longest-match dictionary tagging of text files
#[derive(Parser, Debug, Clone)]
#[command(name = "phrasefind")]
#[command(about = "Find dictionary phrases (genes, diseases, drugs, ...) in text files")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct PhraseFindArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "tsv")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl PhraseFindArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Build a dictionary from a text file and write its binary cache
    Compile(CompileArgs),

    /// Find dictionary phrases in text files
    Find(FindArgs),

    /// Show dictionary statistics
    Stats(StatsArgs),
}

/// Arguments for compiling a dictionary
#[derive(Parser, Debug, Clone)]
pub struct CompileArgs {
    /// Text dictionary (id<TAB>name1|name2|..., optionally gzipped)
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Lower-case all names
    #[arg(short, long)]
    pub lowercase: bool,

    /// Cache file to write (default: next to the dictionary, ending in .trie.gz)
    #[arg(short, long, value_name = "CACHE_FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for finding phrases
#[derive(Parser, Debug, Clone)]
pub struct FindArgs {
    /// Text dictionary or .trie.gz cache
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Text files to scan
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Match configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Regex defining a word (overrides the configuration file)
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Lower-case texts and text dictionaries
    #[arg(short, long)]
    pub lowercase: bool,

    /// Number of threads used to scan files
    #[arg(short, long)]
    pub threads: Option<usize>,
}

/// Arguments for dictionary statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Text dictionary or .trie.gz cache
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Lower-case names when reading a text dictionary
    #[arg(short, long)]
    pub lowercase: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated rows
    Tsv,
    /// JSON output
    Json,
}
