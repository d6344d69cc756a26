//! Captured audio handed to recognizers.
//!
//! `AudioData` is mono PCM: little-endian frame bytes plus the sample rate and
//! the width of one sample in bytes. Recognizers only read it; the WAV
//! container sent upstream is produced by [`AudioData::wav_data`].

use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use thiserror::Error;

/// Invalid parameters when constructing [`AudioData`]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AudioError {
    #[error("sample width must be between 1 and 4 bytes, got {0}")]
    InvalidSampleWidth(u16),

    #[error("sample rate must be greater than zero")]
    InvalidSampleRate,

    #[error("frame data length {len} is not a multiple of the sample width {width}")]
    MisalignedFrames { len: usize, width: u16 },
}

/// Mono PCM audio captured upstream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioData {
    frame_data: Vec<u8>,
    sample_rate: u32,
    sample_width: u16,
}

impl AudioData {
    /// Wrap raw little-endian PCM frames.
    ///
    /// # Errors
    /// Returns an error if `sample_width` is outside 1..=4, `sample_rate` is
    /// zero, or `frame_data` does not hold a whole number of samples.
    pub fn new(frame_data: Vec<u8>, sample_rate: u32, sample_width: u16) -> Result<Self, AudioError> {
        if !(1..=4).contains(&sample_width) {
            return Err(AudioError::InvalidSampleWidth(sample_width));
        }
        if sample_rate == 0 {
            return Err(AudioError::InvalidSampleRate);
        }
        if frame_data.len() % sample_width as usize != 0 {
            return Err(AudioError::MisalignedFrames {
                len: frame_data.len(),
                width: sample_width,
            });
        }

        Ok(Self {
            frame_data,
            sample_rate,
            sample_width,
        })
    }

    /// Build 16-bit audio from signed samples.
    pub fn from_pcm_i16(samples: &[i16], sample_rate: u32) -> Result<Self, AudioError> {
        let frame_data = samples.iter().flat_map(|s| s.to_le_bytes()).collect();
        Self::new(frame_data, sample_rate, 2)
    }

    /// Load audio from a WAV file.
    ///
    /// Multi-channel files are averaged down to mono and float files are
    /// converted to 16-bit PCM.
    pub fn from_wav_file(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open WAV file: {}", path.display()))?;
        Self::from_wav_reader(BufReader::new(file))
    }

    /// Load audio from any reader producing a WAV stream.
    pub fn from_wav_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = hound::WavReader::new(reader).context("Failed to read WAV header")?;
        let spec = reader.spec();

        let (samples, sample_width) = match spec.sample_format {
            hound::SampleFormat::Int => {
                let samples = reader
                    .samples::<i32>()
                    .collect::<Result<Vec<_>, _>>()
                    .context("Failed to read int samples")?;
                (samples, spec.bits_per_sample.div_ceil(8))
            }
            hound::SampleFormat::Float => {
                let samples = reader
                    .samples::<f32>()
                    .map(|s| s.map(float_to_i16))
                    .collect::<Result<Vec<_>, _>>()
                    .context("Failed to read float samples")?;
                (samples, 2)
            }
        };

        let mono = downmix(&samples, spec.channels);
        let width = sample_width as usize;
        let mut frame_data = Vec::with_capacity(mono.len() * width);
        for sample in mono {
            frame_data.extend_from_slice(&sample.to_le_bytes()[..width]);
        }

        Ok(Self::new(frame_data, spec.sample_rate, sample_width)?)
    }

    /// Raw little-endian PCM frames
    pub fn frame_data(&self) -> &[u8] {
        &self.frame_data
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Bytes per sample
    pub fn sample_width(&self) -> u16 {
        self.sample_width
    }

    /// Number of samples in the clip
    pub fn frame_count(&self) -> usize {
        self.frame_data.len() / self.sample_width as usize
    }

    pub fn duration(&self) -> Duration {
        Duration::from_secs_f64(self.frame_count() as f64 / self.sample_rate as f64)
    }

    /// Wrap the frames in a mono WAV container.
    ///
    /// Samples are written unchanged, at the original rate and width.
    pub fn wav_data(&self) -> Result<Vec<u8>> {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: self.sample_rate,
            bits_per_sample: self.sample_width * 8,
            sample_format: hound::SampleFormat::Int,
        };

        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer =
                hound::WavWriter::new(&mut cursor, spec).context("Failed to create WAV writer")?;
            for frame in self.frame_data.chunks_exact(self.sample_width as usize) {
                let written = match frame {
                    [b0] => writer.write_sample(*b0 as i8),
                    [b0, b1] => writer.write_sample(i16::from_le_bytes([*b0, *b1])),
                    [b0, b1, b2] => {
                        let sign = if b2 & 0x80 != 0 { 0xff } else { 0x00 };
                        writer.write_sample(i32::from_le_bytes([*b0, *b1, *b2, sign]))
                    }
                    [b0, b1, b2, b3] => {
                        writer.write_sample(i32::from_le_bytes([*b0, *b1, *b2, *b3]))
                    }
                    _ => unreachable!("sample width validated in AudioData::new"),
                };
                written.context("Failed to write WAV sample")?;
            }
            writer.finalize().context("Failed to finalize WAV data")?;
        }

        Ok(cursor.into_inner())
    }
}

/// Convert a float sample in [-1.0, 1.0] to 16-bit range
fn float_to_i16(sample: f32) -> i32 {
    (sample.clamp(-1.0, 1.0) * i16::MAX as f32).round() as i32
}

/// Average interleaved channels into one
fn downmix(samples: &[i32], channels: u16) -> Vec<i32> {
    if channels <= 1 {
        return samples.to_vec();
    }

    samples
        .chunks(channels as usize)
        .map(|frame| {
            let sum: i64 = frame.iter().map(|&s| s as i64).sum();
            (sum / frame.len() as i64) as i32
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_wav(spec: hound::WavSpec, samples: &[i16]) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
            for s in samples {
                writer.write_sample(*s).unwrap();
            }
            writer.finalize().unwrap();
        }
        cursor.into_inner()
    }

    #[test]
    fn test_rejects_invalid_width() {
        assert_eq!(
            AudioData::new(vec![0; 10], 16000, 5),
            Err(AudioError::InvalidSampleWidth(5))
        );
        assert_eq!(
            AudioData::new(vec![0; 10], 16000, 0),
            Err(AudioError::InvalidSampleWidth(0))
        );
    }

    #[test]
    fn test_rejects_zero_rate_and_partial_frames() {
        assert_eq!(
            AudioData::new(vec![0; 4], 0, 2),
            Err(AudioError::InvalidSampleRate)
        );
        assert_eq!(
            AudioData::new(vec![0; 3], 16000, 2),
            Err(AudioError::MisalignedFrames { len: 3, width: 2 })
        );
    }

    #[test]
    fn test_duration() {
        let audio = AudioData::from_pcm_i16(&[0; 8000], 16000).unwrap();
        assert_eq!(audio.frame_count(), 8000);
        assert_eq!(audio.duration(), Duration::from_millis(500));
    }

    #[test]
    fn test_wav_data_preserves_samples() {
        let samples = [0i16, 1, -1, i16::MAX, i16::MIN, 1234];
        let audio = AudioData::from_pcm_i16(&samples, 16000).unwrap();

        let wav = audio.wav_data().unwrap();
        let mut reader = hound::WavReader::new(Cursor::new(wav)).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 16000);
        assert_eq!(spec.bits_per_sample, 16);

        let decoded: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(decoded, samples);
    }

    #[test]
    fn test_wav_data_24_bit_sign_extension() {
        // -2 and 0x7fffff as 24-bit little-endian
        let frames = vec![0xfe, 0xff, 0xff, 0xff, 0xff, 0x7f];
        let audio = AudioData::new(frames, 8000, 3).unwrap();

        let wav = audio.wav_data().unwrap();
        let mut reader = hound::WavReader::new(Cursor::new(wav)).unwrap();
        let decoded: Vec<i32> = reader.samples::<i32>().map(|s| s.unwrap()).collect();
        assert_eq!(decoded, vec![-2, 0x7f_ffff]);
    }

    #[test]
    fn test_from_wav_reader_mono() {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 22050,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let wav = write_wav(spec, &[10, -20, 30]);

        let audio = AudioData::from_wav_reader(Cursor::new(wav)).unwrap();
        assert_eq!(audio.sample_rate(), 22050);
        assert_eq!(audio.sample_width(), 2);
        assert_eq!(audio, AudioData::from_pcm_i16(&[10, -20, 30], 22050).unwrap());
    }

    #[test]
    fn test_from_wav_reader_downmixes_stereo() {
        let spec = hound::WavSpec {
            channels: 2,
            sample_rate: 16000,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let wav = write_wav(spec, &[100, 300, -50, -150]);

        let audio = AudioData::from_wav_reader(Cursor::new(wav)).unwrap();
        assert_eq!(audio, AudioData::from_pcm_i16(&[200, -100], 16000).unwrap());
    }

    #[test]
    fn test_from_wav_reader_converts_float() {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 16000,
            bits_per_sample: 32,
            sample_format: hound::SampleFormat::Float,
        };
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
            for s in [0.0f32, 1.0, -1.0, 2.0] {
                writer.write_sample(s).unwrap();
            }
            writer.finalize().unwrap();
        }

        let audio = AudioData::from_wav_reader(Cursor::new(cursor.into_inner())).unwrap();
        assert_eq!(audio.sample_width(), 2);
        assert_eq!(
            audio,
            AudioData::from_pcm_i16(&[0, i16::MAX, -i16::MAX, i16::MAX], 16000).unwrap()
        );
    }

    #[test]
    fn test_from_wav_file_missing() {
        let err = AudioData::from_wav_file(Path::new("/nonexistent/clip.wav")).unwrap_err();
        assert!(err.to_string().contains("Failed to open WAV file"));
    }

    #[test]
    fn test_from_wav_reader_rejects_garbage() {
        assert!(AudioData::from_wav_reader(Cursor::new(b"not a wav".to_vec())).is_err());
    }
}
