//! Generation service port definition.

use serde_json::Value;

use crate::domain::{GenerationError, Prompt};

/// Request sent to a text-generation service.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Model-level instruction applied to the whole exchange.
    pub system_instruction: String,
    /// The user prompt.
    pub instruction: String,
    /// Structured-output schema the reply must conform to.
    pub schema: Value,
}

impl From<Prompt> for GenerationRequest {
    fn from(prompt: Prompt) -> Self {
        Self {
            system_instruction: prompt.system_instruction,
            instruction: prompt.instruction,
            schema: prompt.schema,
        }
    }
}

/// Port for the external text-generation service.
///
/// Implementations perform exactly one outbound call per invocation and return
/// the raw textual payload, or `None` when the service answered without one.
pub trait GenerationService {
    fn complete(&self, request: &GenerationRequest) -> Result<Option<String>, GenerationError>;
}
