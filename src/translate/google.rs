//! Google Cloud Translation (v2, REST) backend.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use super::Translator;

pub const DEFAULT_ENDPOINT: &str = "https://translation.googleapis.com/language/translate/v2";

/// How the backend should interpret the submitted text.
///
/// `Html` is the service default and escapes characters such as `'` into
/// entities in the response, so `Text` is used unless configured otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextFormat {
    #[default]
    Text,
    Html,
}

#[derive(Debug, Clone)]
pub struct GoogleTranslatorOptions {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub source_language: Option<String>,
    pub format: TextFormat,
    /// `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for GoogleTranslatorOptions {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            source_language: None,
            format: TextFormat::default(),
            timeout: None,
        }
    }
}

pub struct GoogleTranslator {
    client: Client,
    options: GoogleTranslatorOptions,
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    target: &'a str,
    format: TextFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    data: TranslationList,
}

#[derive(Debug, Deserialize)]
struct TranslationList {
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Translation {
    translated_text: String,
}

impl GoogleTranslator {
    pub fn new(options: GoogleTranslatorOptions) -> Result<Self> {
        let client = Client::builder()
            .timeout(options.timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, options })
    }

    fn request_body<'a>(
        &'a self,
        text: &'a str,
        target_language: &'a str,
    ) -> TranslateRequest<'a> {
        TranslateRequest {
            q: text,
            target: target_language,
            format: self.options.format,
            source: self.options.source_language.as_deref(),
        }
    }
}

impl Translator for GoogleTranslator {
    fn translate(&self, text: &str, target_language: &str) -> Result<String> {
        let mut request = self
            .client
            .post(&self.options.endpoint)
            .json(&self.request_body(text, target_language));
        if let Some(key) = &self.options.api_key {
            request = request.query(&[("key", key)]);
        }

        let response = request
            .send()
            .with_context(|| format!("Request to {} failed", self.options.endpoint))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            bail!("Translation API returned {}: {}", status, body);
        }

        let body = response.text().context("Failed to read translation response")?;
        parse_response(&body)
    }
}

fn parse_response(body: &str) -> Result<String> {
    let response: TranslateResponse =
        serde_json::from_str(body).context("Malformed translation response")?;

    response
        .data
        .translations
        .into_iter()
        .next()
        .map(|t| t.translated_text)
        .context("Translation response contained no translations")
}
