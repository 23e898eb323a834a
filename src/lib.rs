//! mdtranslate - line-by-line Markdown translation
//!
//! mdtranslate is a CLI tool and library that sends every non-blank line of a
//! Markdown document to a translation service and writes the result back with
//! the same line structure. Fence markers and blank lines are copied verbatim.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, output, exit status)
//! - `config`: Configuration file loading and parsing
//! - `markdown`: Document model, fence classification and the rewrite pass
//! - `translate`: Translation backend trait and the Google implementation
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod markdown;
pub mod translate;
pub mod utils;
