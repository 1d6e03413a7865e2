// KPI card domain model
use crate::domain::format::FormatSpec;

#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesPoint {
    pub label: String,
    pub value: f64,
}

impl TimeSeriesPoint {
    pub fn new(label: String, value: f64) -> Self {
        Self { label, value }
    }
}

/// Visual pass-through fields. Accepted verbatim; the rendering surface
/// interprets them.
#[derive(Debug, Clone)]
pub struct CardStyle {
    pub background_color: String,
    pub border: Option<String>,
    pub shadow: bool,
    pub border_radius: String,
    pub line_color: Option<String>,
    pub height: Option<String>,
}

/// A fully-resolved card: every derived number computed, every default
/// applied. Built once per request and discarded after serialization.
#[derive(Debug, Clone)]
pub struct KpiCard {
    pub name: String,
    pub value: f64,
    pub value_before: f64,
    pub delta: f64,
    pub delta_percent: f64,
    pub relative_change: bool,
    pub series: Option<Vec<TimeSeriesPoint>>,
    pub format: FormatSpec,
    pub style: CardStyle,
    pub show_average: bool,
    pub average: Option<f64>,
    pub info_text: Option<String>,
    pub is_inverse: bool,
    pub chart_type: String,
    pub key: Option<String>,
}

/// Argument defaults shared by the ad-hoc request bag and the config presets.
pub mod defaults {
    pub fn background_color() -> String {
        "#ffffff".to_string()
    }

    pub fn border() -> Option<String> {
        Some("1px solid #e5e7eb".to_string())
    }

    pub fn shadow() -> bool {
        true
    }

    pub fn border_radius() -> String {
        "12px".to_string()
    }

    pub fn chart_type() -> String {
        "line".to_string()
    }
}
