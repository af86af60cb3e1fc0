//! Trade signal detection.
//!
//! A trend is only traded when ADX shows enough strength; direction comes
//! from where price sits relative to VWAP:
//! - ADX above threshold, price above VWAP = bullish
//! - ADX above threshold, price below VWAP = bearish
//! - anything else (weak trend, or price exactly at VWAP) = no trade

use crate::types::{MarketSnapshot, SignalLabel};

/// ADX level above which a trend is considered strong enough to trade.
pub const ADX_TREND_THRESHOLD: f64 = 25.0;

/// Derive a trade signal from a market snapshot.
///
/// Total over every input: negative readings are compared as-is and NaN
/// fails every comparison, yielding [`SignalLabel::NoTrade`].
pub fn evaluate(snapshot: &MarketSnapshot) -> SignalLabel {
    let trending = snapshot.adx > ADX_TREND_THRESHOLD;

    if trending && snapshot.price > snapshot.vwap {
        SignalLabel::Bullish
    } else if trending && snapshot.price < snapshot.vwap {
        SignalLabel::Bearish
    } else {
        SignalLabel::NoTrade
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weak_trend_is_no_trade() {
        for adx in [0.0, 10.0, 24.99, 25.0, -40.0] {
            for (price, vwap) in [(410.0, 400.0), (390.0, 400.0), (400.0, 400.0)] {
                let snapshot = MarketSnapshot::new(adx, price, vwap);
                assert_eq!(evaluate(&snapshot), SignalLabel::NoTrade, "adx={}", adx);
            }
        }
    }

    #[test]
    fn test_bullish_above_vwap() {
        let snapshot = MarketSnapshot::new(30.0, 410.0, 400.0);
        assert_eq!(evaluate(&snapshot), SignalLabel::Bullish);
    }

    #[test]
    fn test_bearish_below_vwap() {
        let snapshot = MarketSnapshot::new(30.0, 390.0, 400.0);
        assert_eq!(evaluate(&snapshot), SignalLabel::Bearish);
    }

    #[test]
    fn test_price_at_vwap_is_no_trade() {
        let snapshot = MarketSnapshot::new(55.0, 400.0, 400.0);
        assert_eq!(evaluate(&snapshot), SignalLabel::NoTrade);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let at = MarketSnapshot::new(25.0, 410.0, 400.0);
        let above = MarketSnapshot::new(25.0001, 410.0, 400.0);
        assert_eq!(evaluate(&at), SignalLabel::NoTrade);
        assert_eq!(evaluate(&above), SignalLabel::Bullish);
    }

    #[test]
    fn test_empty_snapshot_is_no_trade() {
        assert_eq!(evaluate(&MarketSnapshot::default()), SignalLabel::NoTrade);
    }

    #[test]
    fn test_negative_prices_compared_as_is() {
        let snapshot = MarketSnapshot::new(40.0, -1.0, -5.0);
        assert_eq!(evaluate(&snapshot), SignalLabel::Bullish);
    }

    #[test]
    fn test_nan_is_no_trade() {
        assert_eq!(
            evaluate(&MarketSnapshot::new(f64::NAN, 410.0, 400.0)),
            SignalLabel::NoTrade
        );
        assert_eq!(
            evaluate(&MarketSnapshot::new(30.0, f64::NAN, 400.0)),
            SignalLabel::NoTrade
        );
    }

    #[test]
    fn test_snapshot_deserializes_with_defaults() {
        let snapshot: MarketSnapshot = serde_json::from_str(r#"{"ADX": 30}"#).unwrap();
        assert_eq!(snapshot, MarketSnapshot::new(30.0, 0.0, 0.0));
        assert_eq!(evaluate(&snapshot), SignalLabel::NoTrade);

        let snapshot: MarketSnapshot =
            serde_json::from_str(r#"{"ADX": 30, "price": 401.2, "VWAP": 400}"#).unwrap();
        assert_eq!(evaluate(&snapshot), SignalLabel::Bullish);
    }
}
