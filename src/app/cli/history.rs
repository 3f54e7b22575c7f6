//! History command implementation.

use std::io::IsTerminal;

use clap::Subcommand;
use dialoguer::Confirm;

use crate::app::api;
use crate::app::cli::print_variations;
use crate::domain::{AppError, HistoryEntry};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Subcommand)]
pub enum HistoryCommands {
    /// List saved generations, newest first
    #[clap(visible_alias = "ls")]
    List {
        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a saved generation
    Show {
        /// Entry id (see `adcraft history list`)
        id: String,
        /// Print the entry as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete a saved generation
    #[clap(visible_alias = "rm")]
    Delete {
        /// Entry id
        id: String,
    },
    /// Delete every saved generation
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn run_history(command: HistoryCommands) -> Result<(), AppError> {
    match command {
        HistoryCommands::List { json } => run_list(json),
        HistoryCommands::Show { id, json } => run_show(&id, json),
        HistoryCommands::Delete { id } => run_delete(&id),
        HistoryCommands::Clear { yes } => run_clear(yes),
    }
}

fn run_list(json: bool) -> Result<(), AppError> {
    let entries = api::history_list()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No saved generations yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", summary_line(entry));
    }
    Ok(())
}

fn run_show(id: &str, json: bool) -> Result<(), AppError> {
    let entry = api::history_show(id)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&entry)?);
        return Ok(());
    }

    let input = &entry.input;
    println!("{}", summary_line(&entry));
    if !input.business_type.is_empty() {
        println!("  Business: {}", input.business_type);
    }
    if !input.target_audience.is_empty() {
        println!("  Audience: {}", input.target_audience);
    }
    println!("  Tone: {} | Language: {}", input.tone, input.language);
    println!();
    print_variations(&entry.result);
    Ok(())
}

fn run_delete(id: &str) -> Result<(), AppError> {
    if api::history_delete(id)? {
        println!("✅ Deleted history entry {}", id);
    } else {
        println!("No history entry '{}'; nothing deleted", id);
    }
    Ok(())
}

fn run_clear(yes: bool) -> Result<(), AppError> {
    if !yes && !confirm_clear()? {
        println!("History not cleared (pass --yes to skip confirmation)");
        return Ok(());
    }

    let removed = api::history_clear()?;
    println!("✅ Cleared {} history entr{}", removed, if removed == 1 { "y" } else { "ies" });
    Ok(())
}

fn confirm_clear() -> Result<bool, AppError> {
    if !std::io::stdin().is_terminal() {
        return Ok(false);
    }

    Confirm::new()
        .with_prompt("Delete all saved generations?")
        .default(false)
        .interact()
        .map_err(|err| {
            AppError::Io(std::io::Error::other(format!("Failed to read confirmation: {}", err)))
        })
}

fn summary_line(entry: &HistoryEntry) -> String {
    let created = entry.created_at.with_timezone(&chrono::Local).format(TIMESTAMP_FORMAT);
    format!(
        "{}  {}  {} ({} · {})",
        entry.id, created, entry.input.product_name, entry.input.platform, entry.input.objective
    )
}
