//! Copy generation against a schema-constrained text-generation service.

use serde_json::Value;

use crate::domain::{AdVariation, CampaignInput, GenerationError, GenerationResult, prompt};
use crate::ports::{GenerationRequest, GenerationService};

/// Sends one prompt per call and turns the reply into a typed result.
///
/// The client does not guard against overlapping calls; the session does.
#[derive(Debug, Clone)]
pub struct GenerationClient<S: GenerationService> {
    service: S,
}

impl<S: GenerationService> GenerationClient<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Generate three ad variations for `input`.
    pub fn generate(&self, input: &CampaignInput) -> Result<GenerationResult, GenerationError> {
        input.validate()?;

        let request = GenerationRequest::from(prompt::build(input));
        tracing::info!(
            product = %input.product_name,
            platform = %input.platform,
            "requesting ad copy variations"
        );

        let payload = self
            .service
            .complete(&request)?
            .filter(|text| !text.trim().is_empty())
            .ok_or(GenerationError::EmptyResponse)?;

        parse_variations(&payload)
    }
}

/// Parse a reply payload into exactly three variations.
pub fn parse_variations(payload: &str) -> Result<GenerationResult, GenerationError> {
    let value: Value = serde_json::from_str(payload.trim()).map_err(|e| {
        GenerationError::MalformedResponse(format!("payload is not valid JSON: {}", e))
    })?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(GenerationError::MalformedResponse(format!(
                "expected a JSON array, got {}",
                json_kind(&other)
            )));
        }
    };

    let variations = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<AdVariation>(item).map_err(|e| {
                GenerationError::MalformedResponse(format!("variation {}: {}", index + 1, e))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    GenerationResult::new(variations)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
