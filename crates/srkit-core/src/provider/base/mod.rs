//! Shared logic for providers exposing an OpenAI-style transcription API.

#[cfg(feature = "http")]
mod http;
mod openai_compatible;

#[cfg(feature = "http")]
pub use http::HttpTranscriptionClient;
pub use openai_compatible::{AUDIO_FILENAME, AUDIO_MIME_TYPE, OpenAICompatibleRecognizer};
