use srkit_core::provider::groq::GROQ_API_KEY_ENV;
use srkit_core::{
    EnvCredentials, GroqModel, GroqOptions, LayeredCredentials, Recognizer, SetupError, Settings,
};

use crate::args::TranscribeArgs;

/// Build a recognizer whose saved API keys take priority over the environment.
pub fn build_recognizer(settings: &Settings) -> Recognizer {
    let credentials = LayeredCredentials::new()
        .layer(settings.clone())
        .layer(EnvCredentials);
    Recognizer::new(credentials)
}

/// Apply command-line overrides on top of the saved defaults.
pub fn merge_options(defaults: &GroqOptions, args: &TranscribeArgs) -> GroqOptions {
    let mut options = defaults.clone();
    if let Some(model) = &args.model {
        options.model = GroqModel::from(model.as_str());
    }
    if let Some(prompt) = &args.prompt {
        options.params.prompt = Some(prompt.clone());
    }
    if let Some(format) = &args.response_format {
        options.params.response_format = Some(format.clone());
    }
    if let Some(temperature) = args.temperature {
        options.params.temperature = Some(temperature);
    }
    if let Some(language) = &args.language {
        options.params.language = Some(language.clone());
    }
    options
}

pub fn print_setup_help(error: &SetupError) {
    eprintln!("Error: {error}");
    match error {
        SetupError::MissingCredential { env_var } if *env_var == GROQ_API_KEY_ENV => {
            eprintln!("\nCreate a key at https://console.groq.com/keys, then either:");
            eprintln!("  export {GROQ_API_KEY_ENV}=gsk_...");
            eprintln!("  srkit config --groq-api-key gsk_...");
        }
        SetupError::MissingCredential { env_var } => {
            eprintln!("\nSet {env_var} in your environment or .env file.");
        }
        SetupError::MissingDependency { library } => {
            eprintln!("\nThis build of srkit has no {library} client.");
            eprintln!("Rebuild with the default features enabled.");
        }
    }
}
