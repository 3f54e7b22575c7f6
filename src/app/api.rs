//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::{FilesystemKeyValueStore, HttpGeminiService};
use crate::app::{
    AppContext,
    commands::{export, generate, history},
    config::load_config,
    generation::GenerationClient,
};

pub use crate::app::commands::generate::{GenerateOptions, GenerateOutcome};
pub use crate::domain::{AppError, HistoryEntry};

/// Create an `AppContext` backed by the user's config directory.
fn create_context() -> Result<AppContext<FilesystemKeyValueStore>, AppError> {
    let config = load_config()?;
    let store = FilesystemKeyValueStore::new(&config);
    Ok(AppContext::new(config, store))
}

/// Generate three ad copy variations and record them in history.
///
/// The brief is validated before the credential is read, so a missing product
/// name is reported even when `GEMINI_API_KEY` is unset.
pub fn generate(options: GenerateOptions) -> Result<GenerateOutcome, AppError> {
    options.input.validate()?;

    let mut ctx = create_context()?;
    let service = HttpGeminiService::from_env(&ctx.config().gemini)?;
    let client = GenerationClient::new(service);
    generate::execute(&mut ctx, &client, options)
}

// =============================================================================
// History API
// =============================================================================

/// Stored generations, newest first.
pub fn history_list() -> Result<Vec<HistoryEntry>, AppError> {
    let ctx = create_context()?;
    Ok(history::list(&ctx))
}

/// Look up one stored generation.
pub fn history_show(id: &str) -> Result<HistoryEntry, AppError> {
    let mut ctx = create_context()?;
    history::show(&mut ctx, id)
}

/// Delete one stored generation. Returns `false` when `id` is unknown.
pub fn history_delete(id: &str) -> Result<bool, AppError> {
    let mut ctx = create_context()?;
    history::delete(&mut ctx, id)
}

/// Delete every stored generation. Returns how many were removed.
pub fn history_clear() -> Result<usize, AppError> {
    let mut ctx = create_context()?;
    history::clear(&mut ctx)
}

// =============================================================================
// Export API
// =============================================================================

/// Export a stored generation as a plain-text document.
///
/// `output` may name a file or an existing directory; it defaults to the
/// current directory.
pub fn export_entry(id: &str, output: Option<&Path>) -> Result<PathBuf, AppError> {
    let mut ctx = create_context()?;
    export::execute(&mut ctx, Some(id), output)
}
