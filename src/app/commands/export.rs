use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::app::AppContext;
use crate::domain::export::{export_file_name, render_document};
use crate::domain::{AppError, CampaignInput, GenerationResult};
use crate::ports::KeyValueStore;

/// Export a stored generation (or the current result when `id` is `None`).
///
/// Returns the path of the written document.
pub fn execute<K: KeyValueStore>(
    ctx: &mut AppContext<K>,
    id: Option<&str>,
    output: Option<&Path>,
) -> Result<PathBuf, AppError> {
    let session = ctx.session_mut();
    if let Some(id) = id {
        session.restore(id)?;
    }

    let result = session.result().ok_or(AppError::NoResultToExport)?;
    let generated_at = session.generated_at().unwrap_or_else(Utc::now);
    write_document(session.form(), result, generated_at, output)
}

/// Render and write the export document, resolving `target` to a file path.
pub fn write_document(
    input: &CampaignInput,
    result: &GenerationResult,
    generated_at: DateTime<Utc>,
    target: Option<&Path>,
) -> Result<PathBuf, AppError> {
    let path = resolve_target(target, &input.product_name)?;
    let document = render_document(input, result, generated_at)?;
    fs::write(&path, document)?;
    tracing::info!(path = %path.display(), "exported ad copy");
    Ok(path)
}

fn resolve_target(target: Option<&Path>, product_name: &str) -> Result<PathBuf, AppError> {
    let file_name = export_file_name(product_name);
    match target {
        None => Ok(std::env::current_dir()?.join(file_name)),
        Some(path) if path.is_dir() => Ok(path.join(file_name)),
        Some(path) => Ok(path.to_path_buf()),
    }
}
