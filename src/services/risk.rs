//! Static stop-loss / take-profit rule for open positions.

use crate::types::{Position, PositionStatus};
use tracing::debug;

/// Default stop-loss multiplier of the entry price.
pub const DEFAULT_STOP_LOSS: f64 = 0.5;
/// Default take-profit multiplier of the entry price.
pub const DEFAULT_TAKE_PROFIT: f64 = 1.0;

/// Thresholds expressed as multipliers of a position's entry price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskLimits {
    /// Close once `loss >= stop_loss * entry_price`.
    pub stop_loss: f64,
    /// Close once `profit >= take_profit * entry_price`.
    pub take_profit: f64,
}

impl Default for RiskLimits {
    fn default() -> Self {
        Self {
            stop_loss: DEFAULT_STOP_LOSS,
            take_profit: DEFAULT_TAKE_PROFIT,
        }
    }
}

impl RiskLimits {
    pub fn new(stop_loss: f64, take_profit: f64) -> Self {
        Self {
            stop_loss,
            take_profit,
        }
    }

    /// Override individual multipliers, keeping the rest.
    pub fn with_overrides(self, stop_loss: Option<f64>, take_profit: Option<f64>) -> Self {
        Self {
            stop_loss: stop_loss.unwrap_or(self.stop_loss),
            take_profit: take_profit.unwrap_or(self.take_profit),
        }
    }

    /// Apply the limits to a position, closing it when a threshold is reached.
    ///
    /// A zero entry price leaves the position untouched. The stop-loss is
    /// checked before the take-profit. Profit and loss are never modified.
    pub fn apply(&self, mut position: Position) -> Position {
        if position.entry_price == 0.0 {
            return position;
        }

        if position.loss >= self.stop_loss * position.entry_price {
            debug!(
                "Stop-loss hit: loss {} >= {} x {}",
                position.loss, self.stop_loss, position.entry_price
            );
            position.status = PositionStatus::Closed;
        } else if position.profit >= self.take_profit * position.entry_price {
            debug!(
                "Take-profit hit: profit {} >= {} x {}",
                position.profit, self.take_profit, position.entry_price
            );
            position.status = PositionStatus::Closed;
        }

        position
    }
}
