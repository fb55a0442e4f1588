//! Bracken - A bracket parser that turns flat text into an indented outline.
//!
//! Scanning and rendering for parenthesized text. A single recursive pass
//! converts the input into a tree of characters and groups reflecting its
//! bracket nesting, which is then rendered with one line per character,
//! indented by nesting depth.

pub mod config;

mod error;
mod outline;

pub use bracken_core::{filter, indent, tree};

pub use error::BrackenError;

use log::{debug, info, trace};

use bracken_core::tree::Node;

use config::AppConfig;

/// Builder for parsing and rendering bracket outlines.
///
/// This provides an API for processing input through the scanning,
/// filtering, and rendering stages.
///
/// # Examples
///
/// ```
/// use bracken::{OutlineBuilder, config::AppConfig};
///
/// let source = "(a + (b + c))";
///
/// // With custom config
/// let config = AppConfig::default();
/// let builder = OutlineBuilder::new(config);
///
/// // Parse source to a bracket tree
/// let tree = builder.parse(source)
///     .expect("Failed to parse");
///
/// // Render the tree as an indented outline
/// let outline = builder.render(&tree);
///
/// // Or use default config
/// let builder = OutlineBuilder::default();
/// ```
#[derive(Default)]
pub struct OutlineBuilder {
    config: AppConfig,
}

impl OutlineBuilder {
    /// Create a new outline builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including scan and render settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse source text into a bracket tree.
    ///
    /// Scans the input into a tree of leaves and groups, then strips space
    /// leaves when the configuration asks for it. With the default
    /// permissive configuration this never fails; in strict mode
    /// unbalanced parentheses are rejected.
    ///
    /// # Arguments
    ///
    /// * `source` - Input text as a string
    ///
    /// # Errors
    ///
    /// Returns `BrackenError::Parse` in strict mode when the input
    /// contains unbalanced parentheses.
    ///
    /// # Examples
    ///
    /// ```
    /// use bracken::{OutlineBuilder, config::AppConfig};
    ///
    /// let builder = OutlineBuilder::new(AppConfig::default());
    /// let tree = builder.parse("(a + b)")
    ///     .expect("Failed to parse input");
    /// ```
    pub fn parse(&self, source: &str) -> Result<Vec<Node>, BrackenError> {
        info!(strict = self.config.scan().strict(); "Scanning input");

        let tree = if self.config.scan().strict() {
            bracken_parser::scan_strict(source)
                .map_err(|err| BrackenError::new_parse_error(err, source))?
        } else {
            bracken_parser::scan(source)
        };

        debug!("Input scanned successfully");
        trace!(tree:?; "Scanned tree");

        if self.config.scan().strip_spaces() {
            return Ok(filter::strip_spaces(&tree));
        }

        Ok(tree)
    }

    /// Render a bracket tree as an indented outline.
    ///
    /// Each leaf produces one output line, indented by its nesting depth
    /// in the units given by the render configuration. Groups produce no
    /// lines of their own.
    ///
    /// # Arguments
    ///
    /// * `tree` - A bracket tree to render
    ///
    /// # Examples
    ///
    /// ```
    /// use bracken::{OutlineBuilder, config::AppConfig};
    ///
    /// let builder = OutlineBuilder::new(AppConfig::default());
    ///
    /// let tree = builder.parse("(ab)")
    ///     .expect("Failed to parse");
    ///
    /// assert_eq!(builder.render(&tree), "  a\n  b\n");
    /// ```
    pub fn render(&self, tree: &[Node]) -> String {
        info!("Rendering outline");
        let rendered = outline::render_outline(tree, self.config.render());
        debug!(lines = rendered.lines().count(); "Outline rendered");

        rendered
    }
}
