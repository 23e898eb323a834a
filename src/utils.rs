//! Common utility functions shared across the codebase.

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

const MARKDOWN_SUFFIX: &[u8] = b".md";
const TRANSLATED_SUFFIX: &[u8] = b"-translated.md";

/// Derives the output path used when none is given on the command line.
///
/// The first occurrence of `.md` anywhere in the path is replaced with
/// `-translated.md`. A path without `.md` is returned unchanged. Paths that
/// are not valid UTF-8 keep their original bytes around the replacement.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use mdtranslate::utils::default_output_path;
///
/// assert_eq!(default_output_path(Path::new("doc.md")), PathBuf::from("doc-translated.md"));
/// assert_eq!(default_output_path(Path::new("notes.txt")), PathBuf::from("notes.txt"));
/// ```
pub fn default_output_path(input: &Path) -> PathBuf {
    let bytes = input.as_os_str().as_encoded_bytes();
    let Some(pos) = bytes
        .windows(MARKDOWN_SUFFIX.len())
        .position(|window| window == MARKDOWN_SUFFIX)
    else {
        return input.to_path_buf();
    };

    let mut output = Vec::with_capacity(bytes.len() + TRANSLATED_SUFFIX.len());
    output.extend_from_slice(&bytes[..pos]);
    output.extend_from_slice(TRANSLATED_SUFFIX);
    output.extend_from_slice(&bytes[pos + MARKDOWN_SUFFIX.len()..]);

    // SAFETY: the split points border an ASCII substring of a valid encoded
    // OsStr, and only ASCII is inserted, so the result is validly encoded.
    PathBuf::from(unsafe { OsString::from_encoded_bytes_unchecked(output) })
}
