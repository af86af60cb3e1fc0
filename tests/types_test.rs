//! Unit tests for types module

use spy::types::*;

#[test]
fn test_signal_label_display() {
    assert_eq!(format!("{}", SignalLabel::Bullish), "Bullish Signal");
    assert_eq!(format!("{}", SignalLabel::Bearish), "Bearish Signal");
    assert_eq!(format!("{}", SignalLabel::NoTrade), "No Trade");
}

#[test]
fn test_signal_label_serialization() {
    let json = serde_json::to_string(&SignalLabel::Bearish).unwrap();
    assert_eq!(json, "\"Bearish Signal\"");

    let parsed: SignalLabel = serde_json::from_str("\"No Trade\"").unwrap();
    assert_eq!(parsed, SignalLabel::NoTrade);
}

#[test]
fn test_position_status_serialization() {
    assert_eq!(serde_json::to_string(&PositionStatus::Executed).unwrap(), "\"executed\"");
    let parsed: PositionStatus = serde_json::from_str("\"closed\"").unwrap();
    assert_eq!(parsed, PositionStatus::Closed);
    assert!(serde_json::from_str::<PositionStatus>("\"pending\"").is_err());
}

#[test]
fn test_position_status_display_matches_wire() {
    for status in [PositionStatus::Open, PositionStatus::Executed, PositionStatus::Closed] {
        let wire = serde_json::to_string(&status).unwrap();
        assert_eq!(wire, format!("\"{}\"", status));
    }
}

#[test]
fn test_market_snapshot_wire_names() {
    let snapshot = MarketSnapshot::new(30.0, 410.0, 400.0);
    let value = serde_json::to_value(snapshot).unwrap();
    assert_eq!(value["ADX"], 30.0);
    assert_eq!(value["price"], 410.0);
    assert_eq!(value["VWAP"], 400.0);
}

#[test]
fn test_empty_snapshot_defaults_to_zero() {
    let snapshot: MarketSnapshot = serde_json::from_str("{}").unwrap();
    assert_eq!(snapshot, MarketSnapshot::default());
}

#[test]
fn test_manage_risk_request_parsing() {
    let request: ManageRiskRequest = serde_json::from_str(
        r#"{"trade": {"entry_price": 400, "loss": 10, "status": "executed"}, "stop_loss": 0.2}"#,
    )
    .unwrap();
    assert_eq!(request.trade.entry_price, 400.0);
    assert_eq!(request.trade.status, PositionStatus::Executed);
    assert_eq!(request.stop_loss, Some(0.2));
    assert_eq!(request.take_profit, None);
}
