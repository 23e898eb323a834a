//! Fence tracking for Markdown lines.
//!
//! A fence marker is any line that, once trimmed, starts with three backticks
//! or three tildes. Every fence marker flips the state, whichever character or
//! run length it uses; the opening delimiter is not matched against the closing one.

use super::document::Line;

const BACKTICK_FENCE: &str = "```";
const TILDE_FENCE: &str = "~~~";

/// Whether the scan is currently inside a fenced code block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FenceState {
    #[default]
    Outside,
    Inside,
}

impl FenceState {
    pub fn toggle(self) -> Self {
        match self {
            FenceState::Outside => FenceState::Inside,
            FenceState::Inside => FenceState::Outside,
        }
    }

    pub fn is_inside(self) -> bool {
        self == FenceState::Inside
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Fence,
    Blank,
    /// Carries the fence state the line was found in.
    Content(FenceState),
}

pub fn is_fence_marker(trimmed: &str) -> bool {
    trimmed.starts_with(BACKTICK_FENCE) || trimmed.starts_with(TILDE_FENCE)
}

/// Classify `line` given the state before it, returning the state after it.
pub fn classify(state: FenceState, line: &Line) -> (LineKind, FenceState) {
    let trimmed = line.trimmed();
    if is_fence_marker(trimmed) {
        (LineKind::Fence, state.toggle())
    } else if trimmed.is_empty() {
        (LineKind::Blank, state)
    } else {
        (LineKind::Content(state), state)
    }
}

/// Stateful wrapper around [`classify`] for a single pass over a document.
#[derive(Debug, Default)]
pub struct LineClassifier {
    state: FenceState,
}

impl LineClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FenceState {
        self.state
    }

    pub fn next_line(&mut self, line: &Line) -> LineKind {
        let (kind, state) = classify(self.state, line);
        self.state = state;
        kind
    }
}
