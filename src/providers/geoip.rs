use crate::domain::model::Coordinates;
use crate::domain::ports::LocationSource;
use crate::providers::require_f64;
use crate::utils::error::{DashError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Hard bound on one acquisition attempt. No internal retry; the caller
/// re-triggers acquisition to try again.
pub const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(8);

/// IP-geolocation stand-in for a device positioning capability. Inherently
/// low-accuracy; every failure mode (transport, bad shape, timeout) is
/// reported as the location being unavailable.
pub struct IpGeoSource {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl IpGeoSource {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            timeout: ACQUIRE_TIMEOUT,
        }
    }

    #[cfg(test)]
    fn with_timeout(endpoint: String, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            timeout,
        }
    }

    async fn request(&self) -> Result<Coordinates> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?;
        let body: serde_json::Value = response.json().await?;
        Coordinates::new(require_f64(&body, "lat")?, require_f64(&body, "lon")?)
    }
}

#[async_trait]
impl LocationSource for IpGeoSource {
    async fn acquire(&self) -> Result<Coordinates> {
        tracing::debug!(endpoint = %self.endpoint, "acquiring location");
        match tokio::time::timeout(self.timeout, self.request()).await {
            Ok(Ok(coords)) => Ok(coords),
            Ok(Err(e)) => Err(DashError::LocationUnavailable {
                reason: e.to_string(),
            }),
            Err(_) => Err(DashError::LocationUnavailable {
                reason: format!("no position within {}s", self.timeout.as_secs()),
            }),
        }
    }
}
