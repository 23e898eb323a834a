//! Markdown line pipeline: document model, fence classification and the
//! translating rewrite pass.

pub mod classify;
pub mod document;
pub mod rewrite;

pub use classify::{FenceState, LineClassifier, LineKind, classify, is_fence_marker};
pub use document::{Document, Line, TranslatedDocument};
pub use rewrite::{CodeBlockPolicy, NoProgress, Progress, ProgressSink, RewriteOptions, rewrite};
