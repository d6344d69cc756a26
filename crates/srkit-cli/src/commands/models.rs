use anyhow::Result;
use srkit_core::{GroqModel, Settings};

pub fn run() -> Result<()> {
    let current = Settings::load().groq.model;

    for model in GroqModel::known() {
        let marker = if *model == current { " [default]" } else { "" };
        println!("{:<28} {}{}", model.as_str(), model.description(), marker);
    }

    if !current.is_known() {
        println!("{:<28} {} [default]", current.as_str(), current.description());
    }
    Ok(())
}
