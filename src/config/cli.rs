use crate::domain::model::SearchBound;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "live-coding")]
#[command(about = "Small interview drills: sorted merge, palindromes, reversal and pair sums")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[arg(long, global = true, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Merge two integer lists into one sorted list
    Merge {
        #[arg(long, allow_hyphen_values = true)]
        left: String,
        #[arg(long, allow_hyphen_values = true)]
        right: String,
    },
    /// Check whether a text reads the same in both directions
    Palindrome { text: String },
    /// Reverse a text in place
    Reverse { text: String },
    /// Report every value whose complement to the target is also present
    Pairs {
        #[arg(long, allow_hyphen_values = true)]
        values: String,
        #[arg(long, allow_hyphen_values = true)]
        target: i64,
        /// Override the configured search bound (inclusive or exclude-last)
        #[arg(long)]
        bound: Option<SearchBound>,
    },
    /// Print the greeting banner
    Greet {
        name: String,
        /// Suppress the welcome line regardless of configuration
        #[arg(long)]
        no_welcome: bool,
    },
    /// Run every drill on the configured inputs
    Demo,
}
