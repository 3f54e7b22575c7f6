pub mod campaign;
pub mod configuration;
pub mod error;
pub mod export;
pub mod history;
pub mod prompt;
pub mod variation;

pub use campaign::{
    CampaignInput, Choice, Language, MISSING_PRODUCT_MESSAGE, Objective, Platform, Tone,
};
pub use configuration::{
    API_KEY_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, Config, ConfigFile, GeminiConfig, StorageConfig,
};
pub use error::{AppError, GenerationError, TransportErrorKind};
pub use history::{HISTORY_KEY, HistoryEntry};
pub use prompt::Prompt;
pub use variation::{AdVariation, Framework, GenerationResult, VARIATION_COUNT};
