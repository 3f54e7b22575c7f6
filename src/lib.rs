//! adcraft: generate ad copy variations with a hosted LLM and keep a local history.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    GenerateOptions, GenerateOutcome, export_entry, generate, history_clear, history_delete,
    history_list, history_show,
};
pub use domain::{
    AdVariation, AppError, CampaignInput, Choice, Framework, GenerationError, GenerationResult,
    HistoryEntry, Language, Objective, Platform, Tone,
};
