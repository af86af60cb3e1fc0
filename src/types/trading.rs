use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt;

/// Signal recorded when the payload does not carry one.
pub const DEFAULT_SIGNAL: &str = "No Signal";
/// Broker recorded when the payload does not carry one.
pub const DEFAULT_BROKER: &str = "Unknown";

/// Lifecycle status of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionStatus {
    /// Position is open and under risk management
    #[default]
    Open,
    /// Trade was recorded through the execute endpoint
    Executed,
    /// A stop-loss or take-profit threshold was reached
    Closed,
}

impl fmt::Display for PositionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionStatus::Open => write!(f, "open"),
            PositionStatus::Executed => write!(f, "executed"),
            PositionStatus::Closed => write!(f, "closed"),
        }
    }
}

/// A single trade under risk management.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Price the trade was entered at
    #[serde(default)]
    pub entry_price: f64,
    /// Current profit
    #[serde(default)]
    pub profit: f64,
    /// Current loss (positive magnitude)
    #[serde(default)]
    pub loss: f64,
    #[serde(default)]
    pub status: PositionStatus,
}

/// Row written to the `trades` table.
///
/// Amounts keep the JSON number the client sent, so an integer column
/// receives `1000` rather than `1000.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub signal: String,
    pub broker: String,
    pub capital_allocation: Number,
    pub entry_price: Number,
    pub status: PositionStatus,
    /// Owner of the trade, kept for future row-level filtering.
    pub user_id: Option<String>,
}

/// Why a trade payload was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PayloadError {
    #[error("No JSON payload provided")]
    Missing,

    #[error("Field '{field}' must be {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },
}

/// Trade request fields extracted from a schema-less JSON payload.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTrade {
    pub signal: String,
    pub broker: String,
    pub capital_allocation: Number,
    pub entry_price: Number,
    pub user_id: Option<String>,
}

impl NewTrade {
    /// Extract a trade from an optional JSON payload.
    ///
    /// Absent and `null` fields take their defaults. Any `status` carried by
    /// the payload is ignored. A missing payload, a non-object, or an empty
    /// object is rejected with [`PayloadError::Missing`].
    pub fn from_payload(payload: Option<&Value>) -> Result<Self, PayloadError> {
        let fields = match payload {
            Some(Value::Object(map)) if !map.is_empty() => map,
            _ => return Err(PayloadError::Missing),
        };

        Ok(Self {
            signal: string_field(fields, "signal")?.unwrap_or_else(|| DEFAULT_SIGNAL.to_string()),
            broker: string_field(fields, "broker")?.unwrap_or_else(|| DEFAULT_BROKER.to_string()),
            capital_allocation: number_field(fields, "capital_allocation")?
                .unwrap_or_else(|| Number::from(0)),
            entry_price: number_field(fields, "entry_price")?.unwrap_or_else(|| Number::from(0)),
            user_id: id_field(fields, "user_id")?,
        })
    }

    /// Build the row to persist. Status is always `executed`.
    pub fn into_record(self) -> TradeRecord {
        TradeRecord {
            signal: self.signal,
            broker: self.broker,
            capital_allocation: self.capital_allocation,
            entry_price: self.entry_price,
            status: PositionStatus::Executed,
            user_id: self.user_id,
        }
    }
}

fn string_field(
    fields: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, PayloadError> {
    match fields.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(_) => Err(PayloadError::InvalidField {
            field,
            expected: "a string",
        }),
    }
}

fn number_field(
    fields: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<Number>, PayloadError> {
    match fields.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => Ok(Some(n.clone())),
        // Form-driven clients often send numbers as strings
        Some(Value::String(s)) => parse_number(s.trim())
            .map(Some)
            .ok_or(PayloadError::InvalidField {
                field,
                expected: "a number",
            }),
        Some(_) => Err(PayloadError::InvalidField {
            field,
            expected: "a number",
        }),
    }
}

/// Parse a numeric string, keeping integers exact.
fn parse_number(s: &str) -> Option<Number> {
    if let Ok(i) = s.parse::<i64>() {
        return Some(Number::from(i));
    }
    if let Ok(u) = s.parse::<u64>() {
        return Some(Number::from(u));
    }
    s.parse::<f64>().ok().and_then(Number::from_f64)
}

fn id_field(
    fields: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, PayloadError> {
    match fields.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(_) => Err(PayloadError::InvalidField {
            field,
            expected: "a string or number",
        }),
    }
}

/// Body of a risk evaluation request.
#[derive(Debug, Clone, Deserialize)]
pub struct ManageRiskRequest {
    pub trade: Position,
    pub stop_loss: Option<f64>,
    pub take_profit: Option<f64>,
}
