use crate::domain::card::defaults;
use crate::domain::format::FormatOptions;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub listen: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CardsConfig {
    #[serde(default)]
    pub cards: Vec<CardDefinition>,
}

/// A card declared in config: everything about its presentation, nothing
/// about its numbers. Readings arrive per request.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CardDefinition {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub format: Option<FormatOptions>,
    #[serde(default = "defaults::background_color")]
    pub background_color: String,
    #[serde(default = "defaults::border")]
    pub border: Option<String>,
    #[serde(default = "defaults::shadow")]
    pub shadow: bool,
    #[serde(default = "defaults::border_radius")]
    pub border_radius: String,
    #[serde(default)]
    pub line_color: Option<String>,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub relative_change: bool,
    #[serde(default)]
    pub show_average: bool,
    #[serde(default)]
    pub info_text: Option<String>,
    #[serde(default)]
    pub is_inverse: bool,
    #[serde(default = "defaults::chart_type")]
    pub chart_type: String,
}

pub fn load_service_config() -> anyhow::Result<ServiceConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/service"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn load_cards_config() -> anyhow::Result<CardsConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/cards"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
