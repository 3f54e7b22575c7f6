//! CLI Adapter.

mod generate;
mod history;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{
    AppError, Choice, GenerationResult, Language, Objective, Platform, Tone, VARIATION_COUNT,
};

#[derive(Parser)]
#[command(name = "adcraft")]
#[command(version)]
#[command(
    about = "Generate ad copy variations with Gemini and keep a local history",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate ad copy variations for a campaign brief
    #[clap(visible_alias = "g")]
    Generate(generate::GenerateArgs),
    /// Browse and manage saved generations
    #[clap(visible_alias = "h")]
    History {
        #[command(subcommand)]
        command: history::HistoryCommands,
    },
    /// Export a saved generation to a text file
    #[clap(visible_alias = "x")]
    Export {
        /// Entry id (see `adcraft history list`)
        id: String,
        /// Output file or directory (defaults to the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List supported platforms, tones, objectives and languages
    #[clap(visible_alias = "o")]
    Options,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Generate(args) => generate::run_generate(args),
        Commands::History { command } => history::run_history(command),
        Commands::Export { id, output } => run_export(&id, output),
        Commands::Options => {
            run_options();
            Ok(())
        }
    };

    if let Err(e) = result {
        match e {
            AppError::Generation(err) => eprintln!("Error: {}", err.user_message()),
            other => eprintln!("Error: {}", other),
        }
        std::process::exit(1);
    }
}

fn run_export(id: &str, output: Option<PathBuf>) -> Result<(), AppError> {
    let path = crate::app::api::export_entry(id, output.as_deref())?;
    println!("✅ Exported {} to {}", id, path.display());
    Ok(())
}

fn run_options() {
    print_choices::<Platform>("Platforms");
    print_choices::<Tone>("Tones");
    print_choices::<Objective>("Objectives");
    print_choices::<Language>("Languages");
}

fn print_choices<C: Choice>(title: &str) {
    println!("{}:", title);
    for choice in C::ALL {
        println!("  {:<12} {}", choice.slug(), choice.label());
    }
    println!();
}

/// Print each variation the way it is meant to be pasted, plus its rationale.
pub(crate) fn print_variations(result: &GenerationResult) {
    for (index, variation) in result.iter().enumerate() {
        println!("OPTION {}/{} ({})", index + 1, VARIATION_COUNT, variation.framework);
        println!("{}", variation.to_plain_text());
        println!();
        println!("Why it works: {}", variation.explanation);
        println!("{}", "-".repeat(50));
        println!();
    }
}
