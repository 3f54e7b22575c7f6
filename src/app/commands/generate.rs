use std::path::PathBuf;

use crate::app::AppContext;
use crate::app::commands::export;
use crate::app::generation::GenerationClient;
use crate::domain::{AppError, CampaignInput, GenerationResult};
use crate::ports::{GenerationService, KeyValueStore};

/// Options for a generate invocation.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub input: CampaignInput,
    /// Export the result to this file or directory after generating.
    pub export: Option<PathBuf>,
}

/// Outcome of a successful generation.
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    pub input: CampaignInput,
    pub result: GenerationResult,
    /// History entry id, absent when the history write failed.
    pub entry_id: Option<String>,
    pub exported_to: Option<PathBuf>,
    /// Export failure message; the generation itself still succeeded.
    pub export_error: Option<String>,
}

/// Submit the brief, record the result, and optionally export it.
pub fn execute<S: GenerationService, K: KeyValueStore>(
    ctx: &mut AppContext<K>,
    client: &GenerationClient<S>,
    options: GenerateOptions,
) -> Result<GenerateOutcome, AppError> {
    let session = ctx.session_mut();
    session.set_form(options.input)?;
    let result = session.submit(client)?.clone();

    let (exported_to, export_error) = match options.export {
        Some(target) => match export::execute(ctx, None, Some(target.as_path())) {
            Ok(path) => (Some(path), None),
            Err(err) => {
                tracing::warn!(
                    path = %target.display(),
                    error = %err,
                    "export after generate failed"
                );
                (None, Some(err.to_string()))
            }
        },
        None => (None, None),
    };

    let session = ctx.session();
    Ok(GenerateOutcome {
        input: session.form().clone(),
        result,
        entry_id: session.saved_entry_id().map(ToOwned::to_owned),
        exported_to,
        export_error,
    })
}
