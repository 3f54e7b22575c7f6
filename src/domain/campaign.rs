//! Campaign brief submitted by the user.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{AppError, GenerationError};

/// Message returned when the product name is missing.
pub const MISSING_PRODUCT_MESSAGE: &str = "Please enter a product or service name.";

/// A closed set of campaign options with human-readable labels.
pub trait Choice: Copy + Sized + 'static {
    /// Name of the option kind, used in error messages.
    const KIND: &'static str;
    /// Every supported value, in display order.
    const ALL: &'static [Self];

    /// Label shown to users and interpolated into prompts.
    fn label(&self) -> &'static str;

    /// Short command-line friendly alias.
    fn slug(&self) -> &'static str;

    /// Parse a value by label or alias, ignoring ASCII case.
    fn parse_choice(value: &str) -> Result<Self, AppError> {
        let value = value.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|choice| {
                choice.label().eq_ignore_ascii_case(value)
                    || choice.slug().eq_ignore_ascii_case(value)
            })
            .ok_or_else(|| AppError::InvalidOption {
                kind: Self::KIND,
                value: value.to_string(),
                available: Self::ALL.iter().map(|c| c.slug()).collect::<Vec<_>>().join(", "),
            })
    }
}

/// Advertising channel the copy is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Platform {
    #[default]
    Facebook,
    Instagram,
    #[serde(rename = "Google Ads (Search)")]
    GoogleAds,
    LinkedIn,
    #[serde(rename = "Twitter/X")]
    Twitter,
    TikTok,
    YouTube,
    #[serde(rename = "Email Marketing")]
    Email,
}

impl Choice for Platform {
    const KIND: &'static str = "platform";
    const ALL: &'static [Self] = &[
        Platform::Facebook,
        Platform::Instagram,
        Platform::GoogleAds,
        Platform::LinkedIn,
        Platform::Twitter,
        Platform::TikTok,
        Platform::YouTube,
        Platform::Email,
    ];

    fn label(&self) -> &'static str {
        match self {
            Platform::Facebook => "Facebook",
            Platform::Instagram => "Instagram",
            Platform::GoogleAds => "Google Ads (Search)",
            Platform::LinkedIn => "LinkedIn",
            Platform::Twitter => "Twitter/X",
            Platform::TikTok => "TikTok",
            Platform::YouTube => "YouTube",
            Platform::Email => "Email Marketing",
        }
    }

    fn slug(&self) -> &'static str {
        match self {
            Platform::Facebook => "facebook",
            Platform::Instagram => "instagram",
            Platform::GoogleAds => "google-ads",
            Platform::LinkedIn => "linkedin",
            Platform::Twitter => "twitter",
            Platform::TikTok => "tiktok",
            Platform::YouTube => "youtube",
            Platform::Email => "email",
        }
    }
}

/// Voice of the generated copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tone {
    #[default]
    Professional,
    Friendly,
    Emotional,
    #[serde(rename = "Luxury/Elegant")]
    Luxury,
    #[serde(rename = "Urgent/Hype")]
    Urgent,
    #[serde(rename = "Witty/Humorous")]
    Witty,
    Minimalist,
}

impl Choice for Tone {
    const KIND: &'static str = "tone";
    const ALL: &'static [Self] = &[
        Tone::Professional,
        Tone::Friendly,
        Tone::Emotional,
        Tone::Luxury,
        Tone::Urgent,
        Tone::Witty,
        Tone::Minimalist,
    ];

    fn label(&self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Friendly => "Friendly",
            Tone::Emotional => "Emotional",
            Tone::Luxury => "Luxury/Elegant",
            Tone::Urgent => "Urgent/Hype",
            Tone::Witty => "Witty/Humorous",
            Tone::Minimalist => "Minimalist",
        }
    }

    fn slug(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Friendly => "friendly",
            Tone::Emotional => "emotional",
            Tone::Luxury => "luxury",
            Tone::Urgent => "urgent",
            Tone::Witty => "witty",
            Tone::Minimalist => "minimalist",
        }
    }
}

/// Campaign goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Objective {
    #[serde(rename = "Brand Awareness")]
    Awareness,
    #[serde(rename = "Traffic/Clicks")]
    Traffic,
    #[serde(rename = "Lead Generation")]
    Leads,
    #[default]
    #[serde(rename = "Sales/Conversions")]
    Sales,
    #[serde(rename = "App Installs")]
    Installs,
    Engagement,
}

impl Choice for Objective {
    const KIND: &'static str = "objective";
    const ALL: &'static [Self] = &[
        Objective::Awareness,
        Objective::Traffic,
        Objective::Leads,
        Objective::Sales,
        Objective::Installs,
        Objective::Engagement,
    ];

    fn label(&self) -> &'static str {
        match self {
            Objective::Awareness => "Brand Awareness",
            Objective::Traffic => "Traffic/Clicks",
            Objective::Leads => "Lead Generation",
            Objective::Sales => "Sales/Conversions",
            Objective::Installs => "App Installs",
            Objective::Engagement => "Engagement",
        }
    }

    fn slug(&self) -> &'static str {
        match self {
            Objective::Awareness => "awareness",
            Objective::Traffic => "traffic",
            Objective::Leads => "leads",
            Objective::Sales => "sales",
            Objective::Installs => "installs",
            Objective::Engagement => "engagement",
        }
    }
}

/// Output language of the copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Spanish,
    French,
    German,
    Urdu,
    Hindi,
    Portuguese,
    Japanese,
}

impl Choice for Language {
    const KIND: &'static str = "language";
    const ALL: &'static [Self] = &[
        Language::English,
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Urdu,
        Language::Hindi,
        Language::Portuguese,
        Language::Japanese,
    ];

    fn label(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
            Language::Urdu => "Urdu",
            Language::Hindi => "Hindi",
            Language::Portuguese => "Portuguese",
            Language::Japanese => "Japanese",
        }
    }

    fn slug(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Spanish => "spanish",
            Language::French => "french",
            Language::German => "german",
            Language::Urdu => "urdu",
            Language::Hindi => "hindi",
            Language::Portuguese => "portuguese",
            Language::Japanese => "japanese",
        }
    }
}

macro_rules! choice_text_impls {
    ($($ty:ty),*) => {$(
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $ty {
            type Err = AppError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                <$ty as Choice>::parse_choice(value)
            }
        }
    )*};
}

choice_text_impls!(Platform, Tone, Objective, Language);

/// The user-supplied brief describing product, audience and channel.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignInput {
    pub product_name: String,
    #[serde(default)]
    pub business_type: String,
    #[serde(default)]
    pub target_audience: String,
    #[serde(default)]
    pub platform: Platform,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub objective: Objective,
    #[serde(default)]
    pub language: Language,
}

impl CampaignInput {
    /// Create a brief with the given product name and default options.
    pub fn new(product_name: impl Into<String>) -> Self {
        Self { product_name: product_name.into(), ..Self::default() }
    }

    /// Reject briefs that cannot be sent to the generation service.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.product_name.trim().is_empty() {
            return Err(GenerationError::Validation(MISSING_PRODUCT_MESSAGE.to_string()));
        }
        Ok(())
    }
}
