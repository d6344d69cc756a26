//! Blocking HTTP client for OpenAI-compatible transcription endpoints.
//!
//! Request format:
//! - `POST {base_url}/audio/transcriptions`
//! - Authorization via `Bearer` token
//! - Multipart form with `model`, `file` and any set optional parameters
//!
//! Response format depends on `response_format`: JSON with a `text` field by
//! default, raw text for `text`, `srt` and `vtt`.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::super::{
    DEFAULT_TIMEOUT_SECS, TranscriptionClient, TranscriptionRequest, TranscriptionResult,
};

/// Response structure for OpenAI-compatible APIs
#[derive(Deserialize)]
struct OpenAICompatibleResponse {
    text: String,
}

/// HTTP transport for OpenAI-compatible transcription APIs
#[derive(Debug, Clone)]
pub struct HttpTranscriptionClient {
    client: reqwest::blocking::Client,
    api_url: String,
    api_key: String,
}

impl HttpTranscriptionClient {
    /// Create a client for the API rooted at `base_url`
    /// (e.g. "https://api.groq.com/openai/v1").
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, api_key, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(
        base_url: &str,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_url: transcriptions_url(base_url),
            api_key: api_key.into(),
        })
    }

    /// Full transcription endpoint URL
    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

impl TranscriptionClient for HttpTranscriptionClient {
    fn create_transcription(&self, request: TranscriptionRequest) -> Result<TranscriptionResult> {
        let TranscriptionRequest {
            audio_data,
            filename,
            mime_type,
            model,
            params,
        } = request;

        crate::verbose!(
            "POST {} (model: {}, {} bytes of audio)",
            self.api_url,
            model,
            audio_data.len()
        );

        let mut form = reqwest::blocking::multipart::Form::new()
            .text("model", model)
            .part(
                "file",
                reqwest::blocking::multipart::Part::bytes(audio_data)
                    .file_name(filename)
                    .mime_str(&mime_type)?,
            );

        for (name, value) in params.form_fields() {
            form = form.text(name, value);
        }

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .multipart(form)
            .send()
            .context("Failed to send request")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            anyhow::bail!("API error ({status}): {error_text}");
        }

        let body = response.text().context("Failed to get response text")?;
        crate::verbose!("Received {} byte response", body.len());

        let text = parse_transcript(body, params.response_format.as_deref())?;
        Ok(TranscriptionResult { text })
    }
}

/// Append the transcriptions endpoint to an API base URL
fn transcriptions_url(base_url: &str) -> String {
    format!(
        "{}/audio/transcriptions",
        base_url.trim().trim_end_matches('/')
    )
}

/// Extract the transcript from a response body.
///
/// JSON formats carry the transcript in `text`; plain formats are the
/// transcript (or subtitle file) itself.
fn parse_transcript(body: String, response_format: Option<&str>) -> Result<String> {
    match response_format {
        None | Some("json") | Some("verbose_json") => {
            let resp: OpenAICompatibleResponse =
                serde_json::from_str(&body).context("Failed to parse API response")?;
            Ok(resp.text)
        }
        Some(_) => Ok(body),
    }
}
