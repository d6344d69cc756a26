//! Show or update saved settings.

use std::path::Path;

use anyhow::{Context, Result};
use srkit_core::provider::groq::GROQ_API_KEY_ENV;
use srkit_core::{GroqModel, Settings};

use crate::args::ConfigArgs;

pub fn run(args: ConfigArgs) -> Result<()> {
    let path = Settings::path();
    let settings = update(&args, &path)?;

    if args.show || settings.is_none() {
        let current = match settings {
            Some(settings) => settings,
            None => Settings::try_load_from(&path)?,
        };
        println!("{}", render(&current)?);
    }
    Ok(())
}

/// Apply `args` to the settings stored at `path` and save them.
///
/// Returns the saved settings, or `None` when nothing was requested.
/// A corrupt settings file is an error rather than being overwritten.
fn update(args: &ConfigArgs, path: &Path) -> Result<Option<Settings>> {
    let mut settings = Settings::try_load_from(path)?;
    if !apply(&mut settings, args) {
        return Ok(None);
    }

    settings.save_to(path)?;
    println!("Saved settings to {}", path.display());
    Ok(Some(settings))
}

/// Apply the requested changes, returning whether anything was set.
fn apply(settings: &mut Settings, args: &ConfigArgs) -> bool {
    let mut changed = false;

    if let Some(key) = &args.groq_api_key {
        settings.set_api_key(GROQ_API_KEY_ENV, key);
        changed = true;
    }
    if let Some(model) = &args.model {
        settings.groq.model = GroqModel::from(model.as_str());
        changed = true;
    }
    if let Some(language) = &args.language {
        settings.groq.params.language = non_empty(language);
        changed = true;
    }
    if let Some(prompt) = &args.prompt {
        settings.groq.params.prompt = non_empty(prompt);
        changed = true;
    }
    if let Some(format) = &args.response_format {
        settings.groq.params.response_format = non_empty(format);
        changed = true;
    }
    if let Some(temperature) = args.temperature {
        settings.groq.params.temperature = Some(temperature);
        changed = true;
    }

    changed
}

/// Settings as pretty JSON with API keys masked
fn render(settings: &Settings) -> Result<String> {
    let mut masked = settings.clone();
    for key in masked.api_keys.values_mut() {
        *key = mask_key(key);
    }
    serde_json::to_string_pretty(&masked).context("Failed to serialize settings")
}

fn mask_key(key: &str) -> String {
    let visible: String = key.chars().take(4).collect();
    format!("{visible}...")
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
