//! Transcribe a WAV file with Groq.

use anyhow::Result;
use srkit_core::{AudioData, Settings, verbose};

use crate::app::{build_recognizer, merge_options};
use crate::args::TranscribeArgs;

pub fn run(args: TranscribeArgs) -> Result<()> {
    let settings = Settings::try_load()?;
    let options = merge_options(&settings.groq, &args);
    let recognizer = build_recognizer(&settings);

    let audio = AudioData::from_wav_file(&args.file)?;
    verbose!(
        "Loaded {} ({:.1}s, {} Hz, {}-bit)",
        args.file.display(),
        audio.duration().as_secs_f64(),
        audio.sample_rate(),
        audio.sample_width() * 8
    );
    verbose!("Using model {}", options.model);

    let transcript = recognizer.recognize_groq(&audio, options)?;
    println!("{transcript}");
    Ok(())
}
