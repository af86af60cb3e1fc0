use serde::{Deserialize, Serialize};
use std::fmt;

/// Point-in-time indicator readings used to derive a trade signal.
///
/// Every field is optional on the wire and defaults to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    /// Average Directional Index (trend strength).
    #[serde(rename = "ADX", default)]
    pub adx: f64,
    /// Current market price.
    #[serde(default)]
    pub price: f64,
    /// Volume Weighted Average Price.
    #[serde(rename = "VWAP", default)]
    pub vwap: f64,
}

impl MarketSnapshot {
    /// Create a snapshot from explicit readings.
    pub fn new(adx: f64, price: f64, vwap: f64) -> Self {
        Self { adx, price, vwap }
    }
}

/// Outcome of signal evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalLabel {
    #[serde(rename = "Bullish Signal")]
    Bullish,
    #[serde(rename = "Bearish Signal")]
    Bearish,
    #[serde(rename = "No Trade")]
    NoTrade,
}

impl SignalLabel {
    /// Get display label for this signal.
    pub fn label(&self) -> &'static str {
        match self {
            SignalLabel::Bullish => "Bullish Signal",
            SignalLabel::Bearish => "Bearish Signal",
            SignalLabel::NoTrade => "No Trade",
        }
    }
}

impl fmt::Display for SignalLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Response body for a signal evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalResponse {
    pub signal: SignalLabel,
}
