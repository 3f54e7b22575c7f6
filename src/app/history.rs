//! Write-through history log of past generations.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::history::entry_id;
use crate::domain::{AppError, CampaignInput, GenerationResult, HISTORY_KEY, HistoryEntry};
use crate::ports::KeyValueStore;

/// Newest-first log of generations, mirrored to a key-value store.
///
/// Every mutation writes the complete log before the in-memory copy changes,
/// so a failed write leaves both sides as they were.
#[derive(Debug)]
pub struct HistoryStore<K: KeyValueStore> {
    store: K,
    entries: Vec<HistoryEntry>,
}

impl<K: KeyValueStore> HistoryStore<K> {
    /// Load the log once from `store`.
    ///
    /// A missing, unreadable or corrupt payload yields an empty log.
    pub fn load(store: K) -> Self {
        let entries = match store.get(HISTORY_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<HistoryEntry>>(&raw) {
                Ok(entries) => entries,
                Err(err) => {
                    tracing::warn!(
                        error = %err,
                        "stored history is corrupt; starting with an empty log"
                    );
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    "failed to read stored history; starting with an empty log"
                );
                Vec::new()
            }
        };

        Self { store, entries }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record a generation at the front of the log.
    pub fn record(
        &mut self,
        input: CampaignInput,
        result: GenerationResult,
        created_at: DateTime<Utc>,
    ) -> Result<&HistoryEntry, AppError> {
        let id = self.unused_id(&created_at, &input.product_name);
        let entry = HistoryEntry::new(id, created_at, input, result);

        let next: Vec<&HistoryEntry> = std::iter::once(&entry).chain(&self.entries).collect();
        self.persist(&next)?;

        self.entries.insert(0, entry);
        tracing::info!(id = %self.entries[0].id, total = self.entries.len(), "recorded generation");
        Ok(&self.entries[0])
    }

    /// Delete one entry. Returns `false` without writing if `id` is unknown.
    pub fn delete(&mut self, id: &str) -> Result<bool, AppError> {
        let Some(position) = self.entries.iter().position(|entry| entry.id == id) else {
            return Ok(false);
        };

        let next: Vec<&HistoryEntry> = self
            .entries
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != position)
            .map(|(_, entry)| entry)
            .collect();
        self.persist(&next)?;

        self.entries.remove(position);
        Ok(true)
    }

    /// Remove every entry. Returns how many were removed.
    pub fn clear(&mut self) -> Result<usize, AppError> {
        self.store.remove(HISTORY_KEY)?;
        let removed = self.entries.len();
        self.entries.clear();
        Ok(removed)
    }

    fn persist<T: Serialize>(&self, entries: &[T]) -> Result<(), AppError> {
        let payload = serde_json::to_string(entries)?;
        self.store.set(HISTORY_KEY, &payload)
    }

    fn unused_id(&self, created_at: &DateTime<Utc>, product_name: &str) -> String {
        let mut salt = 0;
        loop {
            let id = entry_id(created_at, product_name, salt);
            if self.get(&id).is_none() {
                return id;
            }
            salt += 1;
        }
    }
}
