pub mod audio;
pub mod credentials;
pub mod error;
pub mod provider;
pub mod recognizer;
pub mod settings;
pub mod verbose;

pub use audio::{AudioData, AudioError};
pub use credentials::{CredentialSource, EnvCredentials, LayeredCredentials, StaticCredentials};
pub use error::SetupError;
#[cfg(feature = "http")]
pub use provider::HttpTranscriptionClient;
pub use provider::{
    ClientLibrary, DEFAULT_TIMEOUT_SECS, OpenAICompatibleRecognizer, RecognizeFn,
    TranscriptionClient, TranscriptionParams, TranscriptionRequest, TranscriptionResult,
    groq::{GroqLibrary, GroqModel, GroqOptions, recognize_groq},
};
pub use recognizer::Recognizer;
pub use settings::Settings;
pub use verbose::set_verbose;
