//! CLI logic for the bracken outline tool.
//!
//! This module contains the core CLI logic for the bracken outline tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs,
    io::{self, Write},
};

use log::info;

use bracken::{
    BrackenError, OutlineBuilder,
    config::{AppConfig, ScanConfig},
};

/// Run the bracken CLI application
///
/// This function processes the input file through the bracken pipeline and
/// writes the resulting outline to the output file, or to stdout when no
/// output path is given.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `BrackenError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors in strict mode
pub fn run(args: &Args) -> Result<(), BrackenError> {
    info!(input_path = args.input; "Processing input");

    // Load configuration and fold in the command-line overrides
    let file_config = config::load_config(args.config.as_ref())?;
    let scan = ScanConfig::new(
        file_config.scan().strict() || args.strict,
        file_config.scan().strip_spaces() || args.strip_spaces,
    );
    let app_config = AppConfig::new(scan, file_config.render().clone());

    // Read input file
    let source = fs::read_to_string(&args.input)?;

    // Process input using the OutlineBuilder API
    let builder = OutlineBuilder::new(app_config);
    let tree = builder.parse(&source)?;
    let outline = builder.render(&tree);

    // Write output file or stdout
    match &args.output {
        Some(path) => {
            fs::write(path, outline)?;
            info!(output_file = path; "Outline written");
        }
        None => {
            io::stdout().write_all(outline.as_bytes())?;
        }
    }

    Ok(())
}
