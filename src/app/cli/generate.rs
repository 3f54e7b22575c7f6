//! Generate command implementation.

use std::io::{ErrorKind, IsTerminal};
use std::path::PathBuf;

use clap::Args;
use dialoguer::{Error as DialoguerError, Input, Select};

use crate::app::api::{self, GenerateOptions, GenerateOutcome};
use crate::app::cli::print_variations;
use crate::domain::{AppError, CampaignInput, Choice, Language, Objective, Platform, Tone};

#[derive(Args)]
pub struct GenerateArgs {
    /// Product or service name
    #[arg(short, long)]
    product: Option<String>,
    /// Business type (e.g. "eco-friendly cleaning brand")
    #[arg(short, long)]
    business: Option<String>,
    /// Target audience description
    #[arg(short, long)]
    audience: Option<String>,
    /// Advertising platform (see `adcraft options`)
    #[arg(long)]
    platform: Option<String>,
    /// Tone of voice
    #[arg(long)]
    tone: Option<String>,
    /// Campaign objective
    #[arg(long)]
    objective: Option<String>,
    /// Output language
    #[arg(long)]
    language: Option<String>,
    /// Export the result to a file or directory (defaults to the current directory)
    #[arg(short, long, num_args = 0..=1, default_missing_value = ".")]
    export: Option<PathBuf>,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
    /// Fill in the brief with an interactive form
    #[arg(short, long)]
    interactive: bool,
}

pub fn run_generate(args: GenerateArgs) -> Result<(), AppError> {
    let seed = brief_from_args(&args)?;
    let interactive = args.interactive
        || (seed.product_name.trim().is_empty()
            && std::io::stdin().is_terminal()
            && std::io::stdout().is_terminal());

    let input = if interactive {
        match prompt_brief(seed)? {
            Some(input) => input,
            None => return Ok(()),
        }
    } else {
        seed
    };

    let outcome = api::generate(GenerateOptions { input, export: args.export })?;
    if args.json {
        print_json(&outcome)?;
    } else {
        print_outcome(&outcome);
    }
    match outcome.export_error {
        Some(message) => Err(AppError::ExportFailed(message)),
        None => Ok(()),
    }
}

fn brief_from_args(args: &GenerateArgs) -> Result<CampaignInput, AppError> {
    let mut input = CampaignInput::new(args.product.clone().unwrap_or_default());
    input.business_type = args.business.clone().unwrap_or_default();
    input.target_audience = args.audience.clone().unwrap_or_default();
    if let Some(value) = &args.platform {
        input.platform = value.parse()?;
    }
    if let Some(value) = &args.tone {
        input.tone = value.parse()?;
    }
    if let Some(value) = &args.objective {
        input.objective = value.parse()?;
    }
    if let Some(value) = &args.language {
        input.language = value.parse()?;
    }
    Ok(input)
}

fn print_outcome(outcome: &GenerateOutcome) {
    let input = &outcome.input;
    println!(
        "✅ Generated {} variations for {} ({} · {})",
        outcome.result.variations().len(),
        input.product_name,
        input.platform,
        input.objective
    );
    println!();
    print_variations(&outcome.result);

    match &outcome.entry_id {
        Some(id) => println!("Saved to history as {}", id),
        None => println!("⚠️  Result could not be saved to history"),
    }
    if let Some(path) = &outcome.exported_to {
        println!("✅ Exported to {}", path.display());
    }
}

fn print_json(outcome: &GenerateOutcome) -> Result<(), AppError> {
    let value = serde_json::json!({
        "id": outcome.entry_id,
        "input": outcome.input,
        "variations": outcome.result,
        "exportedTo": outcome.exported_to,
        "exportError": outcome.export_error,
    });
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

/// Ask for every brief field, pre-filled from `seed`. Returns `None` if cancelled.
fn prompt_brief(seed: CampaignInput) -> Result<Option<CampaignInput>, AppError> {
    let Some(product_name) = prompt_text("Product or service name", &seed.product_name, false)?
    else {
        return Ok(None);
    };
    let Some(business_type) = prompt_text("Business type", &seed.business_type, true)? else {
        return Ok(None);
    };
    let Some(target_audience) = prompt_text("Target audience", &seed.target_audience, true)?
    else {
        return Ok(None);
    };
    let Some(platform) = prompt_choice::<Platform>("Platform", seed.platform)? else {
        return Ok(None);
    };
    let Some(tone) = prompt_choice::<Tone>("Tone", seed.tone)? else {
        return Ok(None);
    };
    let Some(objective) = prompt_choice::<Objective>("Objective", seed.objective)? else {
        return Ok(None);
    };
    let Some(language) = prompt_choice::<Language>("Language", seed.language)? else {
        return Ok(None);
    };

    Ok(Some(CampaignInput {
        product_name,
        business_type,
        target_audience,
        platform,
        tone,
        objective,
        language,
    }))
}

fn prompt_text(
    prompt: &str,
    initial: &str,
    allow_empty: bool,
) -> Result<Option<String>, AppError> {
    let result = Input::<String>::new()
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(allow_empty)
        .interact_text();

    match result {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(prompt_error(prompt, err)),
    }
}

fn prompt_choice<C: Choice + PartialEq>(prompt: &str, current: C) -> Result<Option<C>, AppError> {
    let items: Vec<&str> = C::ALL.iter().map(|choice| choice.label()).collect();
    let default = C::ALL.iter().position(|choice| *choice == current).unwrap_or(0);

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(default)
        .interact_opt()
        .map_err(|err| prompt_error(prompt, err))?;

    Ok(selection.map(|index| C::ALL[index]))
}

fn prompt_error(prompt: &str, err: DialoguerError) -> AppError {
    let message = format!("Failed to read {}: {}", prompt.to_lowercase(), err);
    AppError::Io(std::io::Error::other(message))
}
