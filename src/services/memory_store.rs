use crate::services::trade_store::{StoreError, TradeStore};
use crate::types::TradeRecord;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

/// In-process trade store for local development and tests.
///
/// Rows are kept in insertion order and given sequential ids.
#[derive(Default)]
pub struct MemoryTradeStore {
    rows: RwLock<Vec<Value>>,
    next_id: AtomicU64,
}

impl MemoryTradeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with rows.
    pub fn with_rows(rows: Vec<Value>) -> Self {
        let next_id = AtomicU64::new(rows.len() as u64);
        Self {
            rows: RwLock::new(rows),
            next_id,
        }
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

#[async_trait]
impl TradeStore for MemoryTradeStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn insert(&self, record: &TradeRecord) -> Result<Vec<Value>, StoreError> {
        let mut row = serde_json::to_value(record)?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        if let Value::Object(ref mut fields) = row {
            fields.insert("id".to_string(), Value::from(id));
        }

        self.rows.write().await.push(row.clone());
        Ok(vec![row])
    }

    async fn select_all(&self) -> Result<Vec<Value>, StoreError> {
        Ok(self.rows.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NewTrade, PositionStatus};
    use serde_json::json;

    fn record(broker: &str) -> TradeRecord {
        NewTrade::from_payload(Some(&json!({ "broker": broker })))
            .unwrap()
            .into_record()
    }

    #[tokio::test]
    async fn test_insert_assigns_ids() {
        let store = MemoryTradeStore::new();
        let first = store.insert(&record("IBKR")).await.unwrap();
        let second = store.insert(&record("Alpaca")).await.unwrap();

        assert_eq!(first[0]["id"], 1);
        assert_eq!(second[0]["id"], 2);
        assert_eq!(second[0]["status"], PositionStatus::Executed.to_string());
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_select_all_preserves_order() {
        let store = MemoryTradeStore::new();
        for broker in ["a", "b", "c"] {
            store.insert(&record(broker)).await.unwrap();
        }

        let rows = store.select_all().await.unwrap();
        let brokers: Vec<_> = rows.iter().map(|r| r["broker"].as_str().unwrap()).collect();
        assert_eq!(brokers, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_with_rows_continues_ids() {
        let store = MemoryTradeStore::with_rows(vec![json!({"id": 1, "broker": "seed"})]);
        let inserted = store.insert(&record("IBKR")).await.unwrap();
        assert_eq!(inserted[0]["id"], 2);
        assert!(!store.is_empty().await);
    }
}
