// Card builder - resolves a raw argument bag into a finished KpiCard
use crate::domain::card::{defaults, CardStyle, KpiCard, TimeSeriesPoint};
use crate::domain::format::{FormatOptions, FormatSpec};
use serde::Deserialize;
use serde_json::Value;

/// The flat argument bag callers send. Field names and defaults follow the
/// calling convention the card frontend was built against.
///
/// The time series is an ordered list of `[index, value]` pairs; the index
/// may be any JSON scalar (month labels, timestamps, plain positions).
#[derive(Debug, Deserialize)]
pub struct CardRequest {
    pub name: String,
    pub value: f64,
    pub value_before: f64,
    #[serde(default)]
    pub relative_change: bool,
    #[serde(default)]
    pub time_series: Option<Vec<(Value, f64)>>,
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
    /// Deprecated: use `format.decimals` instead. When present this overrides
    /// the format's decimals unconditionally.
    #[serde(default)]
    pub decimals: Option<u32>,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub show_average: bool,
    #[serde(default)]
    pub info_text: Option<String>,
    #[serde(default)]
    pub is_inverse: bool,
    #[serde(default = "defaults::chart_type")]
    pub chart_type: String,
    #[serde(default)]
    pub key: Option<String>,
}

/// Build a fully-resolved card from the raw arguments. Pure and total for
/// numeric input: no I/O, no failure paths.
pub fn build_card(req: CardRequest) -> KpiCard {
    let format = FormatSpec::resolve(req.format).with_legacy_decimals(req.decimals);

    let delta = req.value - req.value_before;
    let delta_percent = percent_change(req.value, req.value_before);

    let (series, average) = match req.time_series {
        Some(entries) => {
            let average = req.show_average.then(|| series_mean(&entries));
            let points = entries
                .into_iter()
                .map(|(index, value)| TimeSeriesPoint::new(index_label(&index), value))
                .collect();
            (Some(points), average)
        }
        None => (None, None),
    };

    KpiCard {
        name: req.name,
        value: req.value,
        value_before: req.value_before,
        delta,
        delta_percent,
        relative_change: req.relative_change,
        series,
        format,
        style: CardStyle {
            background_color: req.background_color,
            border: req.border,
            shadow: req.shadow,
            border_radius: req.border_radius,
            line_color: req.line_color,
            height: req.height,
        },
        show_average: req.show_average,
        average,
        info_text: req.info_text,
        is_inverse: req.is_inverse,
        chart_type: req.chart_type,
        key: req.key,
    }
}

/// Percentage change vs. the prior value. A zero baseline yields 0 rather
/// than an error; the frontend renders that as a flat delta.
fn percent_change(value: f64, value_before: f64) -> f64 {
    if value_before == 0.0 {
        0.0
    } else {
        (value - value_before) / value_before * 100.0
    }
}

/// Arithmetic mean over the raw input values, computed before the points are
/// reshaped.
fn series_mean(entries: &[(Value, f64)]) -> f64 {
    let sum: f64 = entries.iter().map(|(_, value)| value).sum();
    sum / entries.len() as f64
}

/// String form of a series index: strings verbatim, anything else via its
/// canonical JSON text.
fn index_label(index: &Value) -> String {
    match index {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: serde_json::Value) -> CardRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_delta_and_percent() {
        let card = build_card(request(json!({
            "name": "Revenue",
            "value": 120.0,
            "value_before": 100.0,
        })));
        assert_eq!(card.delta, 20.0);
        assert_eq!(card.delta_percent, 20.0);
    }

    #[test]
    fn test_zero_baseline_substitutes_zero_percent() {
        let card = build_card(request(json!({
            "name": "Signups",
            "value": 50.0,
            "value_before": 0.0,
        })));
        assert_eq!(card.delta, 50.0);
        assert_eq!(card.delta_percent, 0.0);
    }

    #[test]
    fn test_negative_delta() {
        let card = build_card(request(json!({
            "name": "Latency",
            "value": 80.0,
            "value_before": 100.0,
        })));
        assert_eq!(card.delta, -20.0);
        assert_eq!(card.delta_percent, -20.0);
    }

    #[test]
    fn test_argument_defaults() {
        let card = build_card(request(json!({
            "name": "Users",
            "value": 1.0,
            "value_before": 1.0,
        })));
        assert!(!card.relative_change);
        assert!(card.series.is_none());
        assert_eq!(card.style.background_color, "#ffffff");
        assert_eq!(card.style.border.as_deref(), Some("1px solid #e5e7eb"));
        assert!(card.style.shadow);
        assert_eq!(card.style.border_radius, "12px");
        assert!(card.style.line_color.is_none());
        assert!(card.style.height.is_none());
        assert!(!card.show_average);
        assert!(card.average.is_none());
        assert!(!card.is_inverse);
        assert_eq!(card.chart_type, "line");
        assert!(card.key.is_none());
        assert_eq!(card.format, crate::domain::format::FormatSpec::default());
    }

    #[test]
    fn test_explicit_null_clears_border() {
        let card = build_card(request(json!({
            "name": "Users",
            "value": 1.0,
            "value_before": 1.0,
            "border": null,
        })));
        assert!(card.style.border.is_none());
    }

    #[test]
    fn test_styling_passes_through_verbatim() {
        let card = build_card(request(json!({
            "name": "Users",
            "value": 1.0,
            "value_before": 1.0,
            "background_color": "rgb(250, 250, 249)",
            "border": "2px dashed purple",
            "height": "180px",
            "chart_type": "candlestick",
        })));
        assert_eq!(card.style.background_color, "rgb(250, 250, 249)");
        assert_eq!(card.style.border.as_deref(), Some("2px dashed purple"));
        assert_eq!(card.style.height.as_deref(), Some("180px"));
        assert_eq!(card.chart_type, "candlestick");
    }

    #[test]
    fn test_series_reshape_preserves_order_and_labels() {
        let card = build_card(request(json!({
            "name": "MRR",
            "value": 3.0,
            "value_before": 2.0,
            "time_series": [["2024-01", 1.0], ["2024-02", 2.0], ["2024-03", 3.0]],
        })));
        let points = card.series.unwrap();
        assert_eq!(points.len(), 3);
        let labels: Vec<&str> = points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, ["2024-01", "2024-02", "2024-03"]);
        assert_eq!(points[2].value, 3.0);
    }

    #[test]
    fn test_numeric_indexes_become_string_labels() {
        let card = build_card(request(json!({
            "name": "Ticks",
            "value": 2.5,
            "value_before": 1.5,
            "time_series": [[0, 1.5], [1, 2.5]],
        })));
        let points = card.series.unwrap();
        assert_eq!(points[0].label, "0");
        assert_eq!(points[1].label, "1");
    }

    #[test]
    fn test_average_needs_flag_and_series() {
        let without_flag = build_card(request(json!({
            "name": "CPU",
            "value": 3.0,
            "value_before": 1.0,
            "time_series": [["a", 1.0], ["b", 2.0], ["c", 3.0]],
        })));
        assert!(without_flag.average.is_none());

        let without_series = build_card(request(json!({
            "name": "CPU",
            "value": 3.0,
            "value_before": 1.0,
            "show_average": true,
        })));
        assert!(without_series.average.is_none());

        let with_both = build_card(request(json!({
            "name": "CPU",
            "value": 3.0,
            "value_before": 1.0,
            "show_average": true,
            "time_series": [["a", 1.0], ["b", 2.0], ["c", 3.0]],
        })));
        assert_eq!(with_both.average, Some(2.0));
    }

    #[test]
    fn test_legacy_decimals_overrides_format() {
        let card = build_card(request(json!({
            "name": "Margin",
            "value": 1.0,
            "value_before": 1.0,
            "format": {"type": "percentage", "decimals": 2},
            "decimals": 0,
        })));
        assert_eq!(card.format.kind, "percentage");
        assert_eq!(card.format.decimals, 0);
    }
}
