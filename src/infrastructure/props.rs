// Mapper to convert domain cards into the frontend's props record
use crate::application::value_store::ComponentValue;
use crate::domain::card::{KpiCard, TimeSeriesPoint};
use crate::domain::format::FormatSpec;
use serde::Serialize;

/// The flat property record the card frontend consumes. Field names are the
/// frontend's contract; every field is present on every card, absent
/// optionals as `null`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardProps {
    pub name: String,
    pub value: f64,
    pub value_before: f64,
    pub delta: f64,
    pub delta_percent: f64,
    pub relative_change: bool,
    pub time_series_data: Option<Vec<PointProps>>,
    pub format: FormatProps,
    pub background_color: String,
    pub border: Option<String>,
    pub shadow: bool,
    pub border_radius: String,
    pub line_color: Option<String>,
    pub height: Option<String>,
    pub show_average: bool,
    pub average_value: Option<f64>,
    pub info_text: Option<String>,
    pub is_inverse: bool,
    pub chart_type: String,
    pub key: Option<String>,
    /// Sentinel the host falls back to before any interactive value exists.
    pub default: ComponentValue,
}

#[derive(Debug, Clone, Serialize)]
pub struct PointProps {
    pub index: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormatProps {
    #[serde(rename = "type")]
    pub kind: String,
    pub decimals: u32,
    pub currency: String,
}

pub fn card_to_props(card: KpiCard) -> CardProps {
    let time_series_data = card
        .series
        .map(|points| points.into_iter().map(point_to_props).collect());

    CardProps {
        name: card.name,
        value: card.value,
        value_before: card.value_before,
        delta: card.delta,
        delta_percent: card.delta_percent,
        relative_change: card.relative_change,
        time_series_data,
        format: format_to_props(card.format),
        background_color: card.style.background_color,
        border: card.style.border,
        shadow: card.style.shadow,
        border_radius: card.style.border_radius,
        line_color: card.style.line_color,
        height: card.style.height,
        show_average: card.show_average,
        average_value: card.average,
        info_text: card.info_text,
        is_inverse: card.is_inverse,
        chart_type: card.chart_type,
        key: card.key,
        default: ComponentValue::Null,
    }
}

fn point_to_props(point: TimeSeriesPoint) -> PointProps {
    PointProps {
        index: point.label,
        value: point.value,
    }
}

fn format_to_props(format: FormatSpec) -> FormatProps {
    FormatProps {
        kind: format.kind,
        decimals: format.decimals,
        currency: format.currency_symbol,
    }
}
