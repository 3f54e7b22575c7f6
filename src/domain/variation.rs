use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::GenerationError;

/// Number of variations produced per generation.
pub const VARIATION_COUNT: usize = 3;

/// Persuasive-writing framework a variation claims to follow.
///
/// Labels outside the four known frameworks are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Framework {
    Aida,
    Pas,
    BenefitDriven,
    Storytelling,
    Other(String),
}

impl Framework {
    pub fn label(&self) -> &str {
        match self {
            Framework::Aida => "AIDA",
            Framework::Pas => "PAS",
            Framework::BenefitDriven => "Benefit-Driven",
            Framework::Storytelling => "Storytelling",
            Framework::Other(label) => label,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Framework::Other(_))
    }
}

impl From<String> for Framework {
    fn from(value: String) -> Self {
        let normalized = value.trim().to_ascii_lowercase().replace([' ', '_'], "-");
        match normalized.as_str() {
            "aida" => Framework::Aida,
            "pas" => Framework::Pas,
            "benefit-driven" => Framework::BenefitDriven,
            "storytelling" => Framework::Storytelling,
            _ => Framework::Other(value),
        }
    }
}

impl From<&str> for Framework {
    fn from(value: &str) -> Self {
        Framework::from(value.to_string())
    }
}

impl From<Framework> for String {
    fn from(value: Framework) -> Self {
        match value {
            Framework::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One generated ad-copy candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdVariation {
    pub headline: String,
    pub primary_text: String,
    pub cta: String,
    pub framework: Framework,
    pub explanation: String,
}

impl AdVariation {
    /// Headline, body and call to action as a single paste-ready block.
    pub fn to_plain_text(&self) -> String {
        format!("Headline: {}\n\n{}\n\nCTA: {}", self.headline, self.primary_text, self.cta)
    }
}

/// Exactly [`VARIATION_COUNT`] variations returned by one generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<AdVariation>", into = "Vec<AdVariation>")]
pub struct GenerationResult {
    variations: Vec<AdVariation>,
}

impl GenerationResult {
    pub fn new(variations: Vec<AdVariation>) -> Result<Self, GenerationError> {
        if variations.len() != VARIATION_COUNT {
            return Err(GenerationError::MalformedResponse(format!(
                "expected {} variations, got {}",
                VARIATION_COUNT,
                variations.len()
            )));
        }
        Ok(Self { variations })
    }

    pub fn variations(&self) -> &[AdVariation] {
        &self.variations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AdVariation> {
        self.variations.iter()
    }
}

impl TryFrom<Vec<AdVariation>> for GenerationResult {
    type Error = GenerationError;

    fn try_from(variations: Vec<AdVariation>) -> Result<Self, Self::Error> {
        GenerationResult::new(variations)
    }
}

impl From<GenerationResult> for Vec<AdVariation> {
    fn from(result: GenerationResult) -> Self {
        result.variations
    }
}

impl<'a> IntoIterator for &'a GenerationResult {
    type Item = &'a AdVariation;
    type IntoIter = std::slice::Iter<'a, AdVariation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
