//! Groq Whisper API provider.
//!
//! Groq serves Whisper models behind an OpenAI-compatible endpoint, so this
//! module only checks prerequisites, builds a client and hands the audio to
//! [`OpenAICompatibleRecognizer`].
//!
//! ## Authentication
//!
//! Requires `GROQ_API_KEY` (create one at <https://console.groq.com/keys>).
//! `GROQ_BASE_URL` overrides the API root, e.g. for a proxy.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::{
    ClientLibrary, OpenAICompatibleRecognizer, RecognizeFn, TranscriptionClient,
    TranscriptionParams,
};
use crate::audio::AudioData;
use crate::credentials::CredentialSource;
use crate::error::SetupError;
use crate::recognizer::Recognizer;

pub const GROQ_API_KEY_ENV: &str = "GROQ_API_KEY";

pub const GROQ_BASE_URL_ENV: &str = "GROQ_BASE_URL";

pub const DEFAULT_GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Groq speech-to-text model.
///
/// See <https://console.groq.com/docs/speech-text#supported-models>.
/// Identifiers not listed here parse as [`GroqModel::Other`] and are left for
/// the API to accept or reject.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GroqModel {
    #[default]
    WhisperLargeV3Turbo,
    WhisperLargeV3,
    DistilWhisperLargeV3En,
    Other(String),
}

static KNOWN_MODELS: [GroqModel; 3] = [
    GroqModel::WhisperLargeV3Turbo,
    GroqModel::WhisperLargeV3,
    GroqModel::DistilWhisperLargeV3En,
];

impl GroqModel {
    /// Model identifier sent to the API
    pub fn as_str(&self) -> &str {
        match self {
            GroqModel::WhisperLargeV3Turbo => "whisper-large-v3-turbo",
            GroqModel::WhisperLargeV3 => "whisper-large-v3",
            GroqModel::DistilWhisperLargeV3En => "distil-whisper-large-v3-en",
            GroqModel::Other(id) => id,
        }
    }

    /// Models documented by Groq
    pub fn known() -> &'static [GroqModel] {
        &KNOWN_MODELS
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, GroqModel::Other(_))
    }

    /// Short description for model listings
    pub fn description(&self) -> &'static str {
        match self {
            GroqModel::WhisperLargeV3Turbo => "Fast multilingual transcription (default)",
            GroqModel::WhisperLargeV3 => "Highest accuracy, multilingual",
            GroqModel::DistilWhisperLargeV3En => "Distilled, English only",
            GroqModel::Other(_) => "Custom model identifier",
        }
    }
}

impl fmt::Display for GroqModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GroqModel {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "whisper-large-v3-turbo" => GroqModel::WhisperLargeV3Turbo,
            "whisper-large-v3" => GroqModel::WhisperLargeV3,
            "distil-whisper-large-v3-en" => GroqModel::DistilWhisperLargeV3En,
            other => GroqModel::Other(other.to_string()),
        })
    }
}

impl From<&str> for GroqModel {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(model) => model,
            Err(never) => match never {},
        }
    }
}

impl From<String> for GroqModel {
    fn from(s: String) -> Self {
        GroqModel::from(s.as_str())
    }
}

impl From<GroqModel> for String {
    fn from(model: GroqModel) -> Self {
        match model {
            GroqModel::Other(id) => id,
            known => known.as_str().to_string(),
        }
    }
}

/// Options for [`recognize_groq`].
///
/// See <https://console.groq.com/docs/speech-text#transcription-endpoint-usage>.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroqOptions {
    #[serde(default)]
    pub model: GroqModel,

    #[serde(flatten)]
    pub params: TranscriptionParams,
}

impl GroqOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(mut self, model: impl Into<GroqModel>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.params.prompt = Some(prompt.into());
        self
    }

    pub fn with_response_format(mut self, format: impl Into<String>) -> Self {
        self.params.response_format = Some(format.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.params.temperature = Some(temperature);
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.params.language = Some(language.into());
        self
    }
}

/// Groq client library backed by the built-in HTTP transport.
///
/// Available only when srkit-core is built with the `http` feature. A blank
/// `GROQ_BASE_URL` counts as unset.
#[derive(Debug, Default, Clone, Copy)]
pub struct GroqLibrary;

impl ClientLibrary for GroqLibrary {
    fn name(&self) -> &'static str {
        "groq"
    }

    fn is_available(&self) -> bool {
        cfg!(feature = "http")
    }

    #[cfg(feature = "http")]
    fn connect(&self, credentials: &dyn CredentialSource) -> Result<Box<dyn TranscriptionClient>> {
        let api_key = credentials
            .get(GROQ_API_KEY_ENV)
            .ok_or(SetupError::MissingCredential {
                env_var: GROQ_API_KEY_ENV,
            })?;
        let client = super::HttpTranscriptionClient::new(&base_url(credentials), api_key)?;
        Ok(Box::new(client))
    }

    #[cfg(not(feature = "http"))]
    fn connect(&self, _credentials: &dyn CredentialSource) -> Result<Box<dyn TranscriptionClient>> {
        Err(SetupError::MissingDependency {
            library: self.name(),
        }
        .into())
    }
}

/// API root from `GROQ_BASE_URL`, or the public endpoint when unset or blank
#[cfg_attr(not(feature = "http"), allow(dead_code))]
fn base_url(credentials: &dyn CredentialSource) -> String {
    credentials
        .get(GROQ_BASE_URL_ENV)
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_GROQ_BASE_URL.to_string())
}

/// Transcribe `audio_data` with the Groq Whisper API.
///
/// Checks, in order, that `GROQ_API_KEY` is present in the recognizer's
/// credentials and that the Groq client library is available; either failure
/// is a [`SetupError`] returned before any client is built. After that the
/// call is delegated to [`OpenAICompatibleRecognizer`] and its transcript or
/// error is returned unchanged.
pub fn recognize_groq(
    recognizer: &Recognizer,
    audio_data: &AudioData,
    options: GroqOptions,
) -> Result<String> {
    let credentials = recognizer.credentials();
    if credentials.get(GROQ_API_KEY_ENV).is_none() {
        return Err(SetupError::MissingCredential {
            env_var: GROQ_API_KEY_ENV,
        }
        .into());
    }

    let library = recognizer.groq_library();
    if !library.is_available() {
        return Err(SetupError::MissingDependency {
            library: library.name(),
        }
        .into());
    }

    let client = OpenAICompatibleRecognizer::new(library.connect(credentials)?);
    client.recognize(audio_data, options.model.as_str(), options.params)
}

const _: RecognizeFn<GroqOptions> = recognize_groq;
