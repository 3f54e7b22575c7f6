//! Plain-text export of a generation.

use chrono::{DateTime, Local, Utc};
use minijinja::{Environment, context};

use crate::domain::{AppError, CampaignInput, GenerationResult};

const TEMPLATE_NAME: &str = "ad_copy_export.txt";
const SEPARATOR: &str = "--------------------------------------------------";
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const EXPORT_TEMPLATE: &str = "\
Ad Copy Results for: {{ input.productName }}
Date: {{ date }}
Platform: {{ input.platform }} | Objective: {{ input.objective }}

{{ separator }}

{% for v in variations %}OPTION {{ loop.index }} ({{ v.framework }})

HEADLINE:
{{ v.headline }}

PRIMARY TEXT:
{{ v.primaryText }}

CTA: {{ v.cta }}

WHY IT WORKS: {{ v.explanation }}

{{ separator }}

{% endfor %}";

/// Render a generation and its brief as a human-readable document.
pub fn render_document(
    input: &CampaignInput,
    result: &GenerationResult,
    generated_at: DateTime<Utc>,
) -> Result<String, AppError> {
    let mut env = Environment::new();
    env.add_template(TEMPLATE_NAME, EXPORT_TEMPLATE)?;
    let template = env.get_template(TEMPLATE_NAME)?;

    let date = generated_at.with_timezone(&Local).format(DATE_FORMAT).to_string();
    let rendered = template.render(context! {
        input => input,
        variations => result.variations(),
        date => date,
        separator => SEPARATOR,
    })?;
    Ok(rendered)
}

/// File name for an exported document: `ad-copy-<product>.txt`.
pub fn export_file_name(product_name: &str) -> String {
    format!("ad-copy-{}.txt", sanitize_product_name(product_name))
}

/// Lowercase, collapse whitespace runs into `-`, and drop anything outside `[a-z0-9_-]`.
pub fn sanitize_product_name(product_name: &str) -> String {
    let slug = product_name
        .split_whitespace()
        .map(|word| {
            word.to_lowercase()
                .chars()
                .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    if slug.is_empty() { "untitled".to_string() } else { slug }
}
