// Value formatting configuration
use serde::{Deserialize, Serialize};

/// Resolved format configuration. Every field is always present; partial
/// input is filled from the documented defaults at resolve time.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatSpec {
    pub kind: String,
    pub decimals: u32,
    pub currency_symbol: String,
}

impl Default for FormatSpec {
    fn default() -> Self {
        Self {
            kind: "number".to_string(),
            decimals: 1,
            currency_symbol: "$".to_string(),
        }
    }
}

/// Partial format input as callers and config files supply it. Unknown keys
/// are ignored, missing keys fall back to the defaults.
///
/// Wire keys match what the rendering surface documents: `type`, `decimals`,
/// `currency`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormatOptions {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub decimals: Option<u32>,
    pub currency: Option<String>,
}

impl FormatSpec {
    /// Merge partial options over the defaults, key by key.
    pub fn resolve(options: Option<FormatOptions>) -> Self {
        let defaults = Self::default();
        match options {
            None => defaults,
            Some(opts) => Self {
                kind: opts.kind.unwrap_or(defaults.kind),
                decimals: opts.decimals.unwrap_or(defaults.decimals),
                currency_symbol: opts.currency.unwrap_or(defaults.currency_symbol),
            },
        }
    }

    /// Apply the deprecated standalone `decimals` argument. When present it
    /// overwrites the resolved value unconditionally, even if the format
    /// options set their own. Kept for the older calling convention.
    pub fn with_legacy_decimals(mut self, decimals: Option<u32>) -> Self {
        if let Some(d) = decimals {
            self.decimals = d;
        }
        self
    }
}
