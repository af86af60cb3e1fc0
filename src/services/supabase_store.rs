use crate::config::SupabaseConfig;
use crate::services::trade_store::{StoreError, TradeStore};
use crate::types::TradeRecord;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

/// PostgREST path prefix under the project URL.
const REST_PATH: &str = "/rest/v1";

/// Trade store backed by a Supabase table through its PostgREST API.
#[derive(Clone)]
pub struct SupabaseStore {
    client: Client,
    table_url: String,
}

impl SupabaseStore {
    /// Create a new Supabase store for the given table.
    ///
    /// The service key is sent on every request as both `apikey` and a bearer
    /// token, so inserts and reads run with the key's privileges.
    pub fn new(config: &SupabaseConfig, table: &str, timeout: Duration) -> Result<Self, StoreError> {
        let mut headers = HeaderMap::new();
        let api_key = HeaderValue::from_str(&config.key)
            .map_err(|_| StoreError::InvalidConfig("SUPABASE_KEY is not a valid header value".into()))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.key))
            .map_err(|_| StoreError::InvalidConfig("SUPABASE_KEY is not a valid header value".into()))?;
        headers.insert("apikey", api_key);
        headers.insert(AUTHORIZATION, bearer);

        let client = Client::builder()
            .user_agent(concat!("Spy/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        let table_url = format!("{}{}/{}", config.url.trim_end_matches('/'), REST_PATH, table);
        info!("Supabase store using {}", table_url);

        Ok(Self { client, table_url })
    }

    /// Full URL of the backing table endpoint.
    pub fn table_url(&self) -> &str {
        &self.table_url
    }

    /// Turn a PostgREST response into rows, surfacing API errors.
    async fn rows(response: Response) -> Result<Vec<Value>, StoreError> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(StoreError::Api {
                status: status.as_u16(),
                message: error_message(&text),
            });
        }

        match serde_json::from_str::<Value>(&text)? {
            Value::Array(rows) => Ok(rows),
            Value::Object(row) => Ok(vec![Value::Object(row)]),
            other => Err(StoreError::UnexpectedShape(format!(
                "expected rows, got {}",
                other
            ))),
        }
    }
}

/// Pull the human-readable message out of a PostgREST error body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

#[async_trait]
impl TradeStore for SupabaseStore {
    fn name(&self) -> &'static str {
        "supabase"
    }

    async fn insert(&self, record: &TradeRecord) -> Result<Vec<Value>, StoreError> {
        debug!("Inserting trade into {}", self.table_url);
        let response = self
            .client
            .post(&self.table_url)
            .header("Prefer", "return=representation")
            .json(record)
            .send()
            .await?;

        Self::rows(response).await
    }

    async fn select_all(&self) -> Result<Vec<Value>, StoreError> {
        let response = self
            .client
            .get(&self.table_url)
            .query(&[("select", "*")])
            .send()
            .await?;

        Self::rows(response).await
    }
}
