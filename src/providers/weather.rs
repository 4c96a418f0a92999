use crate::domain::model::{Coordinates, WeatherReading};
use crate::domain::ports::PanelSource;
use crate::providers::require_f64;
use crate::utils::error::{DashError, Result};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;

const CURRENT_FIELDS: &str =
    "temperature_2m,apparent_temperature,relative_humidity_2m,wind_speed_10m";

/// Open-Meteo style current-weather endpoint, requested by decimal-degree
/// coordinates.
pub struct OpenMeteoSource {
    client: Client,
    endpoint: String,
}

impl OpenMeteoSource {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl PanelSource for OpenMeteoSource {
    type Input = Coordinates;
    type Output = WeatherReading;

    async fn fetch(&self, coords: Coordinates) -> Result<WeatherReading> {
        tracing::debug!(endpoint = %self.endpoint, "requesting weather");
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("latitude", coords.latitude.to_string()),
                ("longitude", coords.longitude.to_string()),
            ])
            .query(&[("current", CURRENT_FIELDS)])
            .send()
            .await?
            .error_for_status()?;

        let body: serde_json::Value = response.json().await?;
        let current = body
            .get("current")
            .filter(|v| v.is_object())
            .ok_or_else(|| DashError::MalformedResponse {
                message: "missing 'current' object".to_string(),
            })?;

        Ok(WeatherReading {
            temperature_c: require_f64(current, "temperature_2m")?,
            feels_like_c: require_f64(current, "apparent_temperature")?,
            humidity_percent: require_f64(current, "relative_humidity_2m")?,
            wind_speed_kmh: require_f64(current, "wind_speed_10m")?,
            coordinates: coords,
            retrieved_at: Utc::now(),
        })
    }
}
