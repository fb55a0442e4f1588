//! Configuration types for scanning and outline rendering.
//!
//! This module provides configuration structures that control how input is
//! scanned and how the resulting tree is rendered. All types implement
//! [`serde::Deserialize`] for flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining scan and render settings.
//! - [`ScanConfig`] - Controls strict validation and space stripping.
//! - [`RenderConfig`] - Controls the indentation of the rendered outline.
//!
//! # Example
//!
//! ```
//! # use bracken::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert!(!config.scan().strict());
//! assert_eq!(config.render().indent_width(), 2);
//! ```

use serde::Deserialize;

use bracken_core::indent::IndentStyle;

/// Top-level application configuration combining scan and render settings.
///
/// Groups [`ScanConfig`] and [`RenderConfig`] into a single configuration
/// root.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Scan configuration section.
    #[serde(default)]
    scan: ScanConfig,

    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified scan and render configurations.
    ///
    /// # Arguments
    ///
    /// * `scan` - Scan mode settings.
    /// * `render` - Outline rendering settings.
    pub fn new(scan: ScanConfig, render: RenderConfig) -> Self {
        Self { scan, render }
    }

    /// Returns the scan configuration.
    pub fn scan(&self) -> &ScanConfig {
        &self.scan
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }
}

/// Scan mode configuration.
///
/// The defaults preserve the scanner's documented permissive contract:
/// nothing is validated and nothing is filtered.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ScanConfig {
    /// Reject unbalanced parentheses instead of accepting them.
    #[serde(default)]
    strict: bool,

    /// Remove space leaves from the tree before rendering.
    #[serde(default)]
    strip_spaces: bool,
}

impl ScanConfig {
    /// Creates a new [`ScanConfig`] with the specified modes.
    pub fn new(strict: bool, strip_spaces: bool) -> Self {
        Self {
            strict,
            strip_spaces,
        }
    }

    /// Returns `true` when unbalanced parentheses are rejected.
    pub fn strict(&self) -> bool {
        self.strict
    }

    /// Returns `true` when space leaves are removed after scanning.
    pub fn strip_spaces(&self) -> bool {
        self.strip_spaces
    }
}

/// Outline rendering configuration.
///
/// One indentation step is `indent_width` repetitions of the
/// [`IndentStyle`] unit character; the default is two spaces per nesting
/// level.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Indentation unit character.
    #[serde(default)]
    indent_style: IndentStyle,

    /// Number of unit characters per nesting level.
    #[serde(default = "default_indent_width")]
    indent_width: usize,
}

fn default_indent_width() -> usize {
    2
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent_style: IndentStyle::default(),
            indent_width: default_indent_width(),
        }
    }
}

impl RenderConfig {
    /// Creates a new [`RenderConfig`] with the specified indentation.
    pub fn new(indent_style: IndentStyle, indent_width: usize) -> Self {
        Self {
            indent_style,
            indent_width,
        }
    }

    /// Returns the indentation unit character style.
    pub fn indent_style(&self) -> IndentStyle {
        self.indent_style
    }

    /// Returns the number of unit characters per nesting level.
    pub fn indent_width(&self) -> usize {
        self.indent_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_permissive() {
        let config = AppConfig::default();
        assert!(!config.scan().strict());
        assert!(!config.scan().strip_spaces());
        assert_eq!(config.render().indent_style(), IndentStyle::Spaces);
        assert_eq!(config.render().indent_width(), 2);
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [scan]
            strict = true

            [render]
            indent_width = 4
            "#,
        )
        .unwrap();

        assert!(config.scan().strict());
        assert!(!config.scan().strip_spaces());
        assert_eq!(config.render().indent_width(), 4);
        assert_eq!(config.render().indent_style(), IndentStyle::Spaces);
    }

    #[test]
    fn test_deserialize_empty_toml() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert!(!config.scan().strict());
        assert_eq!(config.render().indent_width(), 2);
    }
}
