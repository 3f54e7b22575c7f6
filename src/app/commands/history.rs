use crate::app::AppContext;
use crate::domain::{AppError, HistoryEntry};
use crate::ports::KeyValueStore;

/// Stored generations, newest first.
pub fn list<K: KeyValueStore>(ctx: &AppContext<K>) -> Vec<HistoryEntry> {
    ctx.session().history().entries().to_vec()
}

/// Restore a stored generation into the session and return it.
pub fn show<K: KeyValueStore>(ctx: &mut AppContext<K>, id: &str) -> Result<HistoryEntry, AppError> {
    ctx.session_mut().restore(id).cloned()
}

/// Delete one entry. Returns `false` when no entry has `id`.
pub fn delete<K: KeyValueStore>(ctx: &mut AppContext<K>, id: &str) -> Result<bool, AppError> {
    let removed = ctx.session_mut().delete_history_entry(id)?;
    if !removed {
        tracing::debug!(id, "history entry not found; nothing deleted");
    }
    Ok(removed)
}

/// Remove every entry. Returns how many were removed.
pub fn clear<K: KeyValueStore>(ctx: &mut AppContext<K>) -> Result<usize, AppError> {
    ctx.session_mut().clear_history()
}
