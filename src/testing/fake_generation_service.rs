use std::sync::{Arc, Mutex};

use crate::domain::{AdVariation, Framework, GenerationError};
use crate::ports::{GenerationRequest, GenerationService};

/// Generation service returning a canned reply and recording every request.
#[derive(Debug, Clone)]
pub struct FakeGenerationService {
    reply: Result<Option<String>, GenerationError>,
    requests: Arc<Mutex<Vec<GenerationRequest>>>,
}

impl FakeGenerationService {
    pub fn replying(payload: impl Into<String>) -> Self {
        Self::with_reply(Ok(Some(payload.into())))
    }

    pub fn with_variations(variations: &[AdVariation]) -> Self {
        Self::replying(serde_json::to_string(variations).unwrap())
    }

    pub fn empty() -> Self {
        Self::with_reply(Ok(None))
    }

    pub fn failing(error: GenerationError) -> Self {
        Self::with_reply(Err(error))
    }

    fn with_reply(reply: Result<Option<String>, GenerationError>) -> Self {
        Self { reply, requests: Arc::new(Mutex::new(vec![])) }
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl GenerationService for FakeGenerationService {
    fn complete(&self, request: &GenerationRequest) -> Result<Option<String>, GenerationError> {
        self.requests.lock().unwrap().push(request.clone());
        self.reply.clone()
    }
}

/// Three schema-conformant variations with distinct frameworks.
pub fn sample_variations() -> Vec<AdVariation> {
    vec![
        AdVariation {
            headline: "Clean Greener, Live Better".into(),
            primary_text: "Tough on grime, gentle on the planet.".into(),
            cta: "Shop Now".into(),
            framework: Framework::Aida,
            explanation: "Grabs attention, then closes on desire.".into(),
        },
        AdVariation {
            headline: "Tired of Harsh Chemicals?".into(),
            primary_text: "Switch to a plant-based spray that works.".into(),
            cta: "Learn More".into(),
            framework: Framework::Pas,
            explanation: "Names the pain before the fix.".into(),
        },
        AdVariation {
            headline: "One Spray, Every Surface".into(),
            primary_text: "Save time and cupboard space.".into(),
            cta: "Get Yours".into(),
            framework: Framework::BenefitDriven,
            explanation: "Leads with concrete benefits.".into(),
        },
    ]
}
