//! Prompt construction for copy generation.
//!
//! The instruction text is derived from the campaign brief; the response
//! schema is fixed and never derived from user input.

use serde_json::{Value, json};

use crate::domain::{CampaignInput, VARIATION_COUNT};

/// System-level instruction sent alongside every prompt.
pub const SYSTEM_INSTRUCTION: &str =
    "You are a world-class copywriter assistant. Always respond with structured JSON data.";

/// Fields every variation object must carry, in schema order.
pub const VARIATION_FIELDS: [&str; 5] =
    ["headline", "primaryText", "cta", "framework", "explanation"];

/// A fully built prompt ready to be sent to a generation service.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub system_instruction: String,
    pub instruction: String,
    pub schema: Value,
}

/// Build the instruction text and response schema for a campaign brief.
pub fn build(input: &CampaignInput) -> Prompt {
    Prompt {
        system_instruction: SYSTEM_INSTRUCTION.to_string(),
        instruction: instruction_text(input),
        schema: output_schema(),
    }
}

fn instruction_text(input: &CampaignInput) -> String {
    format!(
        "You are an expert digital marketer and copywriter with decades of experience in high-converting advertising.

Task: Create exactly {count} distinct ad copy variations for the following product/service.

Product Details:
- Product Name: {product}
- Industry/Business: {business}
- Target Audience: {audience}
- Ad Platform: {platform}
- Tone of Voice: {tone}
- Objective: {objective}
- Language: {language}

Guidelines:
1. Strictly follow the character limits and formatting rules for {platform}.
2. Use a named persuasive copywriting framework for each variation (AIDA, PAS, Benefit-Driven, Storytelling).
3. Be specific, avoid generic fluff. Focus on benefits over features.
4. Ensure the output is in {language}.

Return a JSON array containing exactly {count} variations.",
        count = VARIATION_COUNT,
        product = input.product_name,
        business = input.business_type,
        audience = input.target_audience,
        platform = input.platform,
        tone = input.tone,
        objective = input.objective,
        language = input.language,
    )
}

/// Response schema: an array of exactly three objects with five required strings.
pub fn output_schema() -> Value {
    json!({
        "type": "ARRAY",
        "minItems": VARIATION_COUNT,
        "maxItems": VARIATION_COUNT,
        "items": {
            "type": "OBJECT",
            "properties": {
                "headline": {
                    "type": "STRING",
                    "description": "The main headline for the ad. Catchy and relevant."
                },
                "primaryText": {
                    "type": "STRING",
                    "description": "The main body copy of the ad."
                },
                "cta": {
                    "type": "STRING",
                    "description": "Call to action button text (e.g., Shop Now, Learn More)."
                },
                "framework": {
                    "type": "STRING",
                    "description": "The copywriting framework used (e.g., AIDA, PAS)."
                },
                "explanation": {
                    "type": "STRING",
                    "description": "A very short explanation of why this copy works."
                }
            },
            "required": VARIATION_FIELDS,
        }
    })
}
