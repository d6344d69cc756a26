mod app;
mod args;
mod commands;

use clap::Parser;
use srkit_core::SetupError;

use args::{Cli, Commands};

fn main() {
    // .env is optional; real environment variables take precedence
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    srkit_core::verbose::init_from_env();
    if cli.verbose {
        srkit_core::set_verbose(true);
    }

    let result = match cli.command {
        Commands::Transcribe(args) => commands::transcribe::run(args),
        Commands::Models => commands::models::run(),
        Commands::Config(args) => commands::config::run(args),
    };

    if let Err(e) = result {
        match e.downcast_ref::<SetupError>() {
            Some(setup) => app::print_setup_help(setup),
            None => eprintln!("Error: {e:#}"),
        }
        std::process::exit(1);
    }
}
