use crate::domain::model::PriceQuote;
use crate::domain::ports::PanelSource;
use crate::providers::require_f64;
use crate::utils::error::{DashError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

/// CoinGecko style simple-price endpoint. Prices are always requested in USD,
/// the dashboard's fixed display currency.
pub struct CoinGeckoSource {
    client: Client,
    endpoint: String,
}

impl CoinGeckoSource {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl PanelSource for CoinGeckoSource {
    type Input = String;
    type Output = PriceQuote;

    async fn fetch(&self, coin_id: String) -> Result<PriceQuote> {
        tracing::debug!(endpoint = %self.endpoint, coin = %coin_id, "requesting price");
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("ids", coin_id.as_str()),
                ("vs_currencies", "usd"),
                ("include_24hr_change", "true"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body: Value = response.json().await?;
        let entry = body
            .get(&coin_id)
            .filter(|v| v.is_object())
            .ok_or_else(|| DashError::MalformedResponse {
                message: format!("no entry for coin '{}'", coin_id),
            })?;

        let price_usd = require_f64(entry, "usd")?;

        // An absent or null change figure is a valid "unknown" state, not
        // zero. Any other non-numeric value is a shape failure.
        let change_24h_percent = match entry.get("usd_24h_change") {
            None | Some(Value::Null) => None,
            Some(value) => Some(value.as_f64().ok_or_else(|| DashError::MalformedResponse {
                message: "non-numeric field 'usd_24h_change'".to_string(),
            })?),
        };

        Ok(PriceQuote {
            coin_id,
            price_usd,
            change_24h_percent,
        })
    }
}
