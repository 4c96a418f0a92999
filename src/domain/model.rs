use crate::utils::error::{DashError, ErrorKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Observable state of a single dashboard panel.
///
/// `Idle` means no load has ever been issued; after the first `load` the
/// panel only moves between `Loading` and the two terminal states.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelStatus<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(ErrorKind),
}

impl<T> PanelStatus<T> {
    pub fn is_terminal(&self) -> bool {
        matches!(self, PanelStatus::Ready(_) | PanelStatus::Failed(_))
    }
}

/// A pair of finite decimal-degree coordinates. Both components are always
/// present together; a lone latitude cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DashError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(DashError::MalformedResponse {
                message: format!("non-finite coordinates: {latitude}, {longitude}"),
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_percent: f64,
    pub wind_speed_kmh: f64,
    pub coordinates: Coordinates,
    pub retrieved_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    pub coin_id: String,
    pub price_usd: f64,
    /// Signed 24-hour change. `None` means the provider reported no change
    /// figure, which is distinct from a change of zero.
    pub change_24h_percent: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RepoEntry {
    pub name: String,
    pub stars: u64,
    pub updated_at: DateTime<Utc>,
    pub url: String,
}
