mod fake_generation_service;
mod memory_key_value_store;

pub use fake_generation_service::{FakeGenerationService, sample_variations};
pub use memory_key_value_store::MemoryKeyValueStore;
