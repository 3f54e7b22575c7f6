use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::{CampaignInput, GenerationResult};

/// Storage key holding the serialized history log.
pub const HISTORY_KEY: &str = "adcraft_history";

const ENTRY_ID_LEN: usize = 16;

/// One successful generation, recorded together with the brief that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub input: CampaignInput,
    pub result: GenerationResult,
}

impl HistoryEntry {
    pub fn new(
        id: String,
        created_at: DateTime<Utc>,
        input: CampaignInput,
        result: GenerationResult,
    ) -> Self {
        Self { id, created_at, input, result }
    }
}

/// Derive a short hex id from the creation time and product name.
///
/// `salt` disambiguates entries created in the same instant for the same product.
pub fn entry_id(created_at: &DateTime<Utc>, product_name: &str, salt: u32) -> String {
    let mut hasher = Sha256::new();
    hasher.update(created_at.timestamp_micros().to_le_bytes());
    hasher.update(product_name.as_bytes());
    hasher.update(salt.to_le_bytes());
    let digest = format!("{:x}", hasher.finalize());
    digest[..ENTRY_ID_LEN].to_string()
}
