use crate::core::location::LocationCache;
use crate::core::panel::Panel;
use crate::domain::model::{Coordinates, PanelStatus, PriceQuote, RepoEntry, WeatherReading};
use crate::domain::ports::{KeyValueStore, LocationSource, PanelSource};
use crate::utils::error::{DashError, Result};
use std::sync::Arc;

/// Handle substituted when the user leaves the repository handle blank.
pub const DEFAULT_HANDLE: &str = "octocat";

/// Aggregate refresh controller over the three panels, the location cache
/// and the positioning capability. Panels fail independently; no error from
/// one load ever reaches another panel or aborts a refresh.
pub struct Dashboard<W, P, R, L, K>
where
    W: PanelSource<Input = Coordinates, Output = WeatherReading>,
    P: PanelSource<Input = String, Output = PriceQuote>,
    R: PanelSource<Input = String, Output = Vec<RepoEntry>>,
    L: LocationSource,
    K: KeyValueStore,
{
    weather: Panel<W>,
    price: Panel<P>,
    repos: Panel<R>,
    location: Arc<L>,
    cache: LocationCache<K>,
    coin_id: String,
    user_handle: String,
}

impl<W, P, R, L, K> Dashboard<W, P, R, L, K>
where
    W: PanelSource<Input = Coordinates, Output = WeatherReading>,
    P: PanelSource<Input = String, Output = PriceQuote>,
    R: PanelSource<Input = String, Output = Vec<RepoEntry>>,
    L: LocationSource,
    K: KeyValueStore,
{
    pub fn new(
        weather: W,
        price: P,
        repos: R,
        location: L,
        cache: LocationCache<K>,
        coin_id: String,
        user_handle: String,
    ) -> Self {
        Self {
            weather: Panel::new("weather", weather),
            price: Panel::new("price", price),
            repos: Panel::new("repos", repos),
            location: Arc::new(location),
            cache,
            coin_id,
            user_handle,
        }
    }

    pub fn weather_status(&self) -> PanelStatus<WeatherReading> {
        self.weather.status()
    }

    pub fn price_status(&self) -> PanelStatus<PriceQuote> {
        self.price.status()
    }

    pub fn repos_status(&self) -> PanelStatus<Vec<RepoEntry>> {
        self.repos.status()
    }

    fn effective_handle(&self) -> String {
        let handle = self.user_handle.trim();
        if handle.is_empty() {
            DEFAULT_HANDLE.to_string()
        } else {
            handle.to_string()
        }
    }

    /// Re-loads every eligible panel. Price and repos are always loaded;
    /// weather only when the cache holds coordinates. The loads run
    /// concurrently and each panel transitions on its own as its fetch
    /// completes, so a slow source never delays another panel's result.
    /// Re-entrant: overlapping refreshes follow the panel's
    /// completion-order-wins rule.
    pub async fn refresh(&self) {
        let coin = self.coin_id.clone();
        let handle = self.effective_handle();

        let cached = match self.cache.get().await {
            Ok(cached) => cached,
            Err(e) => {
                tracing::warn!(error = %e, "location cache unreadable, skipping weather");
                None
            }
        };

        tracing::info!(
            coin = %coin,
            handle = %handle,
            has_location = cached.is_some(),
            "refreshing dashboard"
        );

        let price = self.price.load(coin);
        let repos = self.repos.load(handle);
        match cached {
            Some(coords) => {
                tokio::join!(price, repos, self.weather.load(coords));
            }
            None => {
                tokio::join!(price, repos);
            }
        }
    }

    /// One-shot location acquisition. On success the ordering is fixed:
    /// cache write, then the weather load is issued (not awaited), then the
    /// coordinates are returned, so a concurrent refresh cannot read a stale
    /// cache after this call returns. On failure the weather panel is left
    /// untouched and the error goes to the caller alone.
    pub async fn acquire_location(&self) -> Result<Coordinates>
    where
        W: 'static,
    {
        let coords = self.location.acquire().await.map_err(|e| match e {
            e @ DashError::LocationUnavailable { .. } => e,
            other => DashError::LocationUnavailable {
                reason: other.to_string(),
            },
        })?;

        self.cache.store(coords).await?;
        tracing::info!(
            latitude = coords.latitude,
            longitude = coords.longitude,
            "location acquired"
        );

        let weather = self.weather.clone();
        tokio::spawn(async move { weather.load(coords).await });

        Ok(coords)
    }
}
