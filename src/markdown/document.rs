use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

/// A single source line.
///
/// `text` never contains a line terminator. `terminated` records whether the
/// line was followed by one (`\n`, `\r\n` or `\r`) in the source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub terminated: bool,
}

impl Line {
    pub fn new(text: impl Into<String>, terminated: bool) -> Self {
        Self {
            text: text.into(),
            terminated,
        }
    }

    /// Text used for classification only. Never emitted.
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    /// The line as it is written back out, with its terminator normalized to `\n`.
    pub fn raw(&self) -> String {
        if self.terminated {
            format!("{}\n", self.text)
        } else {
            self.text.clone()
        }
    }
}

/// A Markdown source file, read once and never mutated.
#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    pub lines: Vec<Line>,
}

impl Document {
    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?;
        Ok(Self::parse(path, &content))
    }

    pub fn parse(path: &Path, content: &str) -> Self {
        Self {
            path: path.to_path_buf(),
            lines: split_lines(content),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Split on universal newline boundaries.
///
/// `\r\n` counts as a single terminator. A trailing terminator does not
/// produce an extra empty line.
fn split_lines(content: &str) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut start = 0;
    let bytes = content.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(Line::new(&content[start..i], true));
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(Line::new(&content[start..i], true));
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }

    if start < bytes.len() {
        lines.push(Line::new(&content[start..], false));
    }

    lines
}

/// The rewritten document. Same number of lines as its source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslatedDocument {
    pub lines: Vec<String>,
}

impl TranslatedDocument {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn render(&self) -> String {
        self.lines.concat()
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        fs::write(path, self.render())
            .with_context(|| format!("Failed to write output file: {}", path.display()))
    }
}
