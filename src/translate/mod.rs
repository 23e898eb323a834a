//! Translation backends.
//!
//! The rewriter only sees the [`Translator`] trait. [`GoogleTranslator`] is the
//! production backend; tests plug in their own implementations.

mod google;

use anyhow::Result;

pub use google::{DEFAULT_ENDPOINT, GoogleTranslator, GoogleTranslatorOptions, TextFormat};

/// Maps a piece of text into the target language.
///
/// Calls are synchronous and made once per content line. Implementations
/// must not retry on their own; a failure aborts the whole run.
pub trait Translator {
    fn translate(&self, text: &str, target_language: &str) -> Result<String>;
}
