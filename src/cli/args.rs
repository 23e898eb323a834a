//! CLI argument definitions using clap.
//!
//! The surface is `mdtranslate <INPUT_FILE> [OUTPUT_FILE]` plus optional flags
//! that override values from `.mdtranslaterc.json`.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::markdown::CodeBlockPolicy;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Markdown file to translate
    // Optional so that a missing file is reported with our own usage text and exit code
    pub input_file: Option<PathBuf>,

    /// Output file (default: input path with `.md` replaced by `-translated.md`)
    pub output_file: Option<PathBuf>,

    /// Extra positional arguments are accepted and ignored
    #[arg(hide = true)]
    pub ignored: Vec<String>,

    /// Target language code (overrides config file)
    #[arg(short, long)]
    pub target_language: Option<String>,

    /// Source language code; detected by the service when omitted
    #[arg(long)]
    pub source_language: Option<String>,

    /// Copy lines inside fenced code blocks without translating them
    #[arg(long)]
    pub preserve_code_blocks: bool,

    /// Translation API endpoint (overrides config file)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// API key sent with every translation request
    #[arg(long, env = "GOOGLE_TRANSLATE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Arguments {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(target) = &self.target_language {
            config.target_language = target.clone();
        }
        if let Some(source) = &self.source_language {
            config.source_language = Some(source.clone());
        }
        if self.preserve_code_blocks {
            config.code_blocks = CodeBlockPolicy::Preserve;
        }
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
    }
}
