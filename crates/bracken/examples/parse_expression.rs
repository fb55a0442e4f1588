//! Example: Parsing an expression and printing its outline
//!
//! This example demonstrates the full pipeline on a small arithmetic
//! expression: scan the text into a bracket tree, strip the spaces, and
//! print the indented outline.

use bracken::{
    OutlineBuilder,
    config::{AppConfig, RenderConfig, ScanConfig},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let source = "(a + (b + c))";
    println!("Source: {source}\n");

    // Strip spaces so only the expression's shape remains
    let config = AppConfig::new(ScanConfig::new(false, true), RenderConfig::default());
    let builder = OutlineBuilder::new(config);

    let tree = builder.parse(source)?;
    println!("Parsed {} top-level node(s)", tree.len());

    let outline = builder.render(&tree);
    println!("Outline:\n{outline}");

    Ok(())
}
