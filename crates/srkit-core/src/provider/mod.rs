//! Transcription providers and the contracts they share.
//!
//! ```text
//! recognize_groq(recognizer, audio, options)
//!   ├── credential check      (SetupError::MissingCredential)
//!   ├── library probe         (SetupError::MissingDependency)
//!   ├── ClientLibrary::connect -> Box<dyn TranscriptionClient>
//!   └── OpenAICompatibleRecognizer::recognize -> transcript
//! ```

mod base;
pub mod groq;
mod library;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::audio::AudioData;
use crate::recognizer::Recognizer;

#[cfg(feature = "http")]
pub use base::HttpTranscriptionClient;
pub use base::{AUDIO_FILENAME, AUDIO_MIME_TYPE, OpenAICompatibleRecognizer};
pub use library::ClientLibrary;

/// Request timeout for transcription uploads
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Signature shared by every provider's recognize function.
///
/// Positional recognizer and audio, then a provider-specific options value
/// carrying the model and optional parameters.
pub type RecognizeFn<O> = fn(&Recognizer, &AudioData, O) -> Result<String>;

/// Optional parameters of an OpenAI-style transcription request.
///
/// Unset fields are left out of the request so the provider's defaults apply.
/// Values are forwarded as given and never validated locally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranscriptionParams {
    /// Text to guide the model's style or continue a previous segment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,

    /// Output format (e.g. "json", "text", "verbose_json")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_format: Option<String>,

    /// Sampling temperature
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Language of the input audio (ISO-639-1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl TranscriptionParams {
    /// Form fields for the parameters that are set, in request order.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::new();
        if let Some(prompt) = &self.prompt {
            fields.push(("prompt", prompt.clone()));
        }
        if let Some(format) = &self.response_format {
            fields.push(("response_format", format.clone()));
        }
        if let Some(temperature) = self.temperature {
            fields.push(("temperature", temperature.to_string()));
        }
        if let Some(language) = &self.language {
            fields.push(("language", language.clone()));
        }
        fields
    }

    pub fn is_empty(&self) -> bool {
        self.form_fields().is_empty()
    }
}

/// Upload handed to a [`TranscriptionClient`]
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptionRequest {
    /// Encoded audio file contents
    pub audio_data: Vec<u8>,
    pub filename: String,
    pub mime_type: String,
    pub model: String,
    pub params: TranscriptionParams,
}

/// Transcript returned by a provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptionResult {
    pub text: String,
}

/// Client for an OpenAI-compatible transcription endpoint.
pub trait TranscriptionClient: Send + Sync {
    /// Send one transcription request and wait for the result.
    fn create_transcription(&self, request: TranscriptionRequest) -> Result<TranscriptionResult>;
}

impl<C: TranscriptionClient + ?Sized> TranscriptionClient for Box<C> {
    fn create_transcription(&self, request: TranscriptionRequest) -> Result<TranscriptionResult> {
        (**self).create_transcription(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_fields_skip_unset() {
        let params = TranscriptionParams {
            temperature: Some(0.2),
            language: Some("en".to_string()),
            ..Default::default()
        };
        assert_eq!(
            params.form_fields(),
            vec![
                ("temperature", "0.2".to_string()),
                ("language", "en".to_string())
            ]
        );
    }

    #[test]
    fn test_form_fields_all_set() {
        let params = TranscriptionParams {
            prompt: Some("Names: Ada, Grace".to_string()),
            response_format: Some("verbose_json".to_string()),
            temperature: Some(0.0),
            language: Some("de".to_string()),
        };
        let names: Vec<_> = params.form_fields().into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            names,
            vec!["prompt", "response_format", "temperature", "language"]
        );
    }

    #[test]
    fn test_default_params_are_empty() {
        assert!(TranscriptionParams::default().is_empty());
    }

    #[test]
    fn test_params_serialization_omits_unset() {
        let params = TranscriptionParams {
            language: Some("en".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&params).unwrap(),
            r#"{"language":"en"}"#
        );
    }
}
