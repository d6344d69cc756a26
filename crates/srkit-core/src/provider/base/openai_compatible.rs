//! Recognizer for providers speaking the OpenAI Whisper API format.
//!
//! Groq, OpenAI and most self-hosted whisper servers accept the same upload:
//! a multipart form with `model` and `file` fields plus optional parameters,
//! answered with `{"text": "..."}`. The recognizer turns [`AudioData`] into
//! that upload and leaves transport to its [`TranscriptionClient`].

use anyhow::Result;

use super::super::{TranscriptionClient, TranscriptionParams, TranscriptionRequest};
use crate::audio::AudioData;

/// File name attached to every upload
pub const AUDIO_FILENAME: &str = "SpeechRecognition_audio.wav";

pub const AUDIO_MIME_TYPE: &str = "audio/wav";

/// Adapter from captured audio to an OpenAI-compatible client
#[derive(Debug, Clone)]
pub struct OpenAICompatibleRecognizer<C> {
    client: C,
}

impl<C: TranscriptionClient> OpenAICompatibleRecognizer<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Transcribe `audio_data` with `model`.
    ///
    /// The audio is wrapped in a WAV container without resampling. `params`
    /// go to the client as given. The transcript is returned untouched and
    /// client errors are propagated as-is.
    pub fn recognize(
        &self,
        audio_data: &AudioData,
        model: &str,
        params: TranscriptionParams,
    ) -> Result<String> {
        let request = TranscriptionRequest {
            audio_data: audio_data.wav_data()?,
            filename: AUDIO_FILENAME.to_string(),
            mime_type: AUDIO_MIME_TYPE.to_string(),
            model: model.to_string(),
            params,
        };

        let result = self.client.create_transcription(request)?;
        Ok(result.text)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::provider::TranscriptionResult;

    struct RecordingClient {
        requests: Mutex<Vec<TranscriptionRequest>>,
        reply: Result<String, String>,
    }

    impl RecordingClient {
        fn replying(text: &str) -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                reply: Ok(text.to_string()),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                reply: Err(message.to_string()),
            }
        }
    }

    impl TranscriptionClient for RecordingClient {
        fn create_transcription(
            &self,
            request: TranscriptionRequest,
        ) -> Result<TranscriptionResult> {
            self.requests.lock().unwrap().push(request);
            match &self.reply {
                Ok(text) => Ok(TranscriptionResult { text: text.clone() }),
                Err(message) => Err(anyhow::anyhow!(message.clone())),
            }
        }
    }

    #[test]
    fn test_builds_wav_upload() {
        let audio = AudioData::from_pcm_i16(&[1, 2, 3, 4], 16000).unwrap();
        let recognizer = OpenAICompatibleRecognizer::new(RecordingClient::replying("hi"));

        let params = TranscriptionParams {
            language: Some("en".to_string()),
            ..Default::default()
        };
        let text = recognizer.recognize(&audio, "whisper-1", params.clone()).unwrap();
        assert_eq!(text, "hi");

        let requests = recognizer.client().requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.filename, AUDIO_FILENAME);
        assert_eq!(request.mime_type, "audio/wav");
        assert_eq!(request.model, "whisper-1");
        assert_eq!(request.params, params);
        assert_eq!(request.audio_data, audio.wav_data().unwrap());
        assert_eq!(&request.audio_data[..4], b"RIFF");
    }

    #[test]
    fn test_client_error_propagates() {
        let audio = AudioData::from_pcm_i16(&[0; 16], 16000).unwrap();
        let recognizer =
            OpenAICompatibleRecognizer::new(RecordingClient::failing("API error (500): boom"));

        let err = recognizer
            .recognize(&audio, "whisper-1", TranscriptionParams::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "API error (500): boom");
    }
}
