//! Command-line argument definitions for the bracken CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, scan modes, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the bracken outline tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input text file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output file; stdout when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Reject unbalanced parentheses instead of accepting them
    #[arg(long)]
    pub strict: bool,

    /// Remove space characters from the tree before rendering
    #[arg(long)]
    pub strip_spaces: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
