use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::markdown::CodeBlockPolicy;
use crate::translate::{DEFAULT_ENDPOINT, GoogleTranslatorOptions, TextFormat};

pub const CONFIG_FILE_NAME: &str = ".mdtranslaterc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_target_language")]
    pub target_language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_language: Option<String>,
    #[serde(default)]
    pub code_blocks: CodeBlockPolicy,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub format: TextFormat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
}

fn default_target_language() -> String {
    "en".to_string()
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_language: default_target_language(),
            source_language: None,
            code_blocks: CodeBlockPolicy::default(),
            endpoint: default_endpoint(),
            format: TextFormat::default(),
            timeout_seconds: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.target_language.trim().is_empty() {
            bail!("'targetLanguage' must not be empty");
        }

        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            bail!(
                "Invalid 'endpoint': \"{}\" (expected an http:// or https:// URL)",
                self.endpoint
            );
        }

        if self.timeout_seconds == Some(0) {
            bail!("'timeoutSeconds' must be greater than zero");
        }

        Ok(())
    }

    pub fn translator_options(&self, api_key: Option<String>) -> GoogleTranslatorOptions {
        GoogleTranslatorOptions {
            endpoint: self.endpoint.clone(),
            api_key,
            source_language: self.source_language.clone(),
            format: self.format,
            timeout: self.timeout_seconds.map(Duration::from_secs),
        }
    }
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            tracing::debug!(path = %path.display(), "Loaded config file");
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
