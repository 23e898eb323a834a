//! Line-by-line translation pass.
//!
//! Fence markers and blank lines are copied through unchanged. Every other
//! line is sent to the [`Translator`] as-is and replaced by the result plus a
//! `\n` terminator. Output is collected in memory; nothing is written here.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::{
    classify::{FenceState, LineClassifier, LineKind},
    document::{Document, TranslatedDocument},
};
use crate::translate::Translator;

/// What to do with content lines inside fenced code blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeBlockPolicy {
    /// Translate code block lines like any other content line.
    #[default]
    Translate,
    /// Copy code block lines through unchanged.
    Preserve,
}

#[derive(Debug, Clone)]
pub struct RewriteOptions {
    pub target_language: String,
    pub code_blocks: CodeBlockPolicy,
}

impl RewriteOptions {
    pub fn new(target_language: impl Into<String>) -> Self {
        Self {
            target_language: target_language.into(),
            code_blocks: CodeBlockPolicy::default(),
        }
    }
}

/// Reported before each translation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// 1-based line number.
    pub index: usize,
    pub total: usize,
    pub in_code_block: bool,
}

pub trait ProgressSink {
    fn on_line(&mut self, progress: Progress);
}

impl<F: FnMut(Progress)> ProgressSink for F {
    fn on_line(&mut self, progress: Progress) {
        self(progress)
    }
}

/// Discards progress notifications.
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn on_line(&mut self, _progress: Progress) {}
}

pub fn rewrite<T, P>(
    document: &Document,
    options: &RewriteOptions,
    translator: &T,
    progress: &mut P,
) -> Result<TranslatedDocument>
where
    T: Translator + ?Sized,
    P: ProgressSink + ?Sized,
{
    let total = document.len();
    let mut classifier = LineClassifier::new();
    let mut lines = Vec::with_capacity(total);

    for (idx, line) in document.lines.iter().enumerate() {
        let index = idx + 1;
        let state = match classifier.next_line(line) {
            LineKind::Fence | LineKind::Blank => {
                lines.push(line.raw());
                continue;
            }
            LineKind::Content(state) => state,
        };

        if state.is_inside() && options.code_blocks == CodeBlockPolicy::Preserve {
            tracing::debug!(line = index, "Preserving code block line");
            lines.push(line.raw());
            continue;
        }

        progress.on_line(Progress {
            index,
            total,
            in_code_block: state == FenceState::Inside,
        });
        tracing::debug!(line = index, total, "Translating line");

        let translated = translator
            .translate(&line.text, &options.target_language)
            .with_context(|| {
                format!(
                    "Failed to translate line {} of {}",
                    index,
                    document.path.display()
                )
            })?;
        lines.push(format!("{}\n", translated));
    }

    if classifier.state().is_inside() {
        tracing::debug!(path = %document.path.display(), "Document ends inside a code block");
    }

    Ok(TranslatedDocument { lines })
}
