//! CLI command implementations.

pub mod check;
pub mod export;
pub mod info;
pub mod render;

use tomocard_roster_model::CardTemplate;

pub(crate) fn parse_template(template: &str) -> anyhow::Result<CardTemplate> {
    match template {
        "full" => Ok(CardTemplate::Full),
        "compact" => Ok(CardTemplate::Compact),
        _ => Err(anyhow::anyhow!(
            "Unknown template: {template}. Use: full, compact"
        )),
    }
}
