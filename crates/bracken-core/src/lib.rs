//! Bracken Core Types and Definitions
//!
//! This crate provides the foundational types for the bracken bracket
//! outliner. It includes:
//!
//! - **Tree**: The [`tree::Node`] sum type the scanner produces
//! - **Filter**: Space-stripping over parsed trees ([`filter`] module)
//! - **Indent**: Indentation unit selection for rendering ([`indent::IndentStyle`])

pub mod filter;
pub mod indent;
pub mod tree;
