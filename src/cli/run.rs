use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::{args::Arguments, report};
use crate::{
    config::{ConfigLoadResult, load_config},
    markdown::{Document, RewriteOptions, rewrite},
    translate::GoogleTranslator,
    utils::default_output_path,
};

/// Translate `input` and write the result.
///
/// The output file is only created once every line has been translated, so
/// a failing translation call leaves any existing output untouched.
///
/// # Returns
/// - `Ok(PathBuf)` with the path that was written
/// - `Err` if config loading, reading, translation or writing fails
pub fn run(args: &Arguments, input: &Path) -> Result<PathBuf> {
    if !args.ignored.is_empty() {
        tracing::debug!(ignored = ?args.ignored, "Ignoring extra positional arguments");
    }

    let cwd = env::current_dir().context("Failed to determine working directory")?;
    let ConfigLoadResult {
        mut config,
        from_file,
    } = load_config(&cwd)?;
    args.apply_overrides(&mut config);
    config.validate()?;

    tracing::debug!(
        from_file,
        target_language = %config.target_language,
        code_blocks = ?config.code_blocks,
        "Resolved configuration"
    );

    let output = args
        .output_file
        .clone()
        .unwrap_or_else(|| default_output_path(input));
    if output == input {
        tracing::warn!(
            path = %output.display(),
            "Output path equals input path, the input file will be overwritten"
        );
    }

    let document = Document::read(input)?;
    let translator = GoogleTranslator::new(config.translator_options(args.api_key.clone()))?;
    let options = RewriteOptions {
        target_language: config.target_language.clone(),
        code_blocks: config.code_blocks,
    };

    let translated = rewrite(&document, &options, &translator, &mut report::print_progress)?;
    translated.write(&output)?;

    Ok(output)
}
