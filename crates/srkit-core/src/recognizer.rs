//! Recognizer context shared by provider functions.

use std::fmt;
use std::sync::Arc;

use anyhow::Result;

use crate::audio::AudioData;
use crate::credentials::{CredentialSource, EnvCredentials};
use crate::provider::ClientLibrary;
use crate::provider::groq::{self, GroqLibrary, GroqOptions};

/// Configuration handed to every recognize function: where credentials come
/// from and which client libraries are installed.
///
/// Immutable and cheap to clone. Provider functions build a fresh client
/// from it on each call, so one `Recognizer` can serve concurrent calls.
#[derive(Clone)]
pub struct Recognizer {
    credentials: Arc<dyn CredentialSource>,
    groq: Arc<dyn ClientLibrary>,
}

impl Recognizer {
    /// Recognizer reading credentials from `credentials`, with the built-in
    /// client libraries.
    pub fn new(credentials: impl CredentialSource + 'static) -> Self {
        Self {
            credentials: Arc::new(credentials),
            groq: Arc::new(GroqLibrary),
        }
    }

    /// Recognizer reading credentials from the process environment.
    pub fn from_env() -> Self {
        Self::new(EnvCredentials)
    }

    pub fn with_credentials(mut self, credentials: impl CredentialSource + 'static) -> Self {
        self.credentials = Arc::new(credentials);
        self
    }

    /// Replace the Groq client library.
    pub fn with_groq_library(mut self, library: impl ClientLibrary + 'static) -> Self {
        self.groq = Arc::new(library);
        self
    }

    pub fn credentials(&self) -> &dyn CredentialSource {
        self.credentials.as_ref()
    }

    pub fn groq_library(&self) -> &dyn ClientLibrary {
        self.groq.as_ref()
    }

    /// Transcribe with the Groq Whisper API. See [`groq::recognize_groq`].
    pub fn recognize_groq(&self, audio_data: &AudioData, options: GroqOptions) -> Result<String> {
        groq::recognize_groq(self, audio_data, options)
    }
}

impl Default for Recognizer {
    fn default() -> Self {
        Self::from_env()
    }
}

impl fmt::Debug for Recognizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Recognizer")
            .field("groq", &self.groq.name())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::StaticCredentials;

    #[test]
    fn test_recognizer_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Recognizer>();
    }

    #[test]
    fn test_with_credentials_replaces_source() {
        let recognizer = Recognizer::new(StaticCredentials::new())
            .with_credentials(StaticCredentials::new().with("GROQ_API_KEY", "gsk_test"));
        assert_eq!(
            recognizer.credentials().get("GROQ_API_KEY").as_deref(),
            Some("gsk_test")
        );
    }

    #[test]
    fn test_default_groq_library() {
        let recognizer = Recognizer::new(StaticCredentials::new());
        assert_eq!(recognizer.groq_library().name(), "groq");
        assert_eq!(
            recognizer.groq_library().is_available(),
            cfg!(feature = "http")
        );
    }
}
