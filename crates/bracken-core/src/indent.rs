//! Indentation unit selection for outline rendering.

use std::fmt;

use serde::Deserialize;

/// The character used for one indentation step in a rendered outline.
///
/// Referenced by the render configuration in the `bracken` facade crate;
/// the default is [`IndentStyle::Spaces`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentStyle {
    /// Indent with space characters.
    #[default]
    Spaces,

    /// Indent with tab characters.
    Tabs,
}

impl IndentStyle {
    /// Returns the single character this style indents with.
    pub fn unit(&self) -> char {
        match self {
            IndentStyle::Spaces => ' ',
            IndentStyle::Tabs => '\t',
        }
    }
}

impl fmt::Display for IndentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndentStyle::Spaces => write!(f, "spaces"),
            IndentStyle::Tabs => write!(f, "tabs"),
        }
    }
}
