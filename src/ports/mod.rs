mod generation_service;
mod key_value_store;

pub use generation_service::{GenerationRequest, GenerationService};
pub use key_value_store::KeyValueStore;
