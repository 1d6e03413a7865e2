// Card service - Use case for building cards from configured presets
use crate::application::card_builder::{build_card, CardRequest};
use crate::domain::card::KpiCard;
use crate::infrastructure::config::{CardDefinition, CardsConfig};
use serde::Deserialize;
use serde_json::Value;

/// A live reading for a preset card: the numbers change per request, the
/// presentation comes from config.
#[derive(Debug, Deserialize)]
pub struct CardReading {
    pub value: f64,
    pub value_before: f64,
    #[serde(default)]
    pub time_series: Option<Vec<(Value, f64)>>,
}

#[derive(Clone)]
pub struct CardService {
    definitions: Vec<CardDefinition>,
}

impl CardService {
    pub fn new(config: CardsConfig) -> Self {
        Self {
            definitions: config.cards,
        }
    }

    pub fn definitions(&self) -> &[CardDefinition] {
        &self.definitions
    }

    /// Build an ad-hoc card straight from a full argument bag.
    pub fn build(&self, request: CardRequest) -> KpiCard {
        build_card(request)
    }

    /// Build a card for a configured preset, or None if the key is unknown.
    pub fn build_preset(&self, key: &str, reading: CardReading) -> Option<KpiCard> {
        let definition = self.definitions.iter().find(|d| d.key == key)?;
        Some(build_card(request_from(definition, reading)))
    }
}

fn request_from(definition: &CardDefinition, reading: CardReading) -> CardRequest {
    CardRequest {
        name: definition.name.clone(),
        value: reading.value,
        value_before: reading.value_before,
        relative_change: definition.relative_change,
        time_series: reading.time_series,
        format: definition.format.clone(),
        background_color: definition.background_color.clone(),
        border: definition.border.clone(),
        shadow: definition.shadow,
        border_radius: definition.border_radius.clone(),
        line_color: definition.line_color.clone(),
        decimals: None,
        height: definition.height.clone(),
        show_average: definition.show_average,
        info_text: definition.info_text.clone(),
        is_inverse: definition.is_inverse,
        chart_type: definition.chart_type.clone(),
        key: Some(definition.key.clone()),
    }
}
