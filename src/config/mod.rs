pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::{DashError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_url, Validate};
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
use clap::Parser;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "mini-dash"))]
#[cfg_attr(
    feature = "cli",
    command(about = "A terminal dashboard aggregating weather, price and repository data")
)]
pub struct CliConfig {
    #[cfg_attr(feature = "cli", arg(long, default_value = "bitcoin"))]
    pub coin_id: String,

    /// Repository handle; blank means the built-in default handle.
    #[cfg_attr(feature = "cli", arg(long, default_value = ""))]
    pub user_handle: String,

    #[cfg_attr(
        feature = "cli",
        arg(long, default_value = "https://api.open-meteo.com/v1/forecast")
    )]
    pub weather_endpoint: String,

    #[cfg_attr(
        feature = "cli",
        arg(long, default_value = "https://api.coingecko.com/api/v3/simple/price")
    )]
    pub price_endpoint: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "https://api.github.com"))]
    pub repos_endpoint: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "http://ip-api.com/json"))]
    pub location_endpoint: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "./cache"))]
    pub cache_path: String,

    /// Acquire a fresh location before refreshing.
    #[cfg_attr(feature = "cli", arg(long))]
    #[serde(default)]
    pub locate: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    #[serde(default)]
    pub verbose: bool,

    /// Optional TOML config file layered over the CLI values.
    #[cfg_attr(feature = "cli", arg(long))]
    #[serde(skip)]
    pub config: Option<String>,
}

/// TOML overlay: every field optional, present values replace the CLI ones.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub dashboard: Option<DashboardSection>,
    pub endpoints: Option<EndpointsSection>,
    pub cache: Option<CacheSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardSection {
    pub coin_id: Option<String>,
    pub user_handle: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EndpointsSection {
    pub weather: Option<String>,
    pub price: Option<String>,
    pub repos: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CacheSection {
    pub path: Option<String>,
}

impl TomlConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| DashError::ConfigError {
            message: format!("failed to parse {}: {}", path, e),
        })
    }

    pub fn apply(self, config: &mut CliConfig) {
        if let Some(dashboard) = self.dashboard {
            if let Some(coin_id) = dashboard.coin_id {
                config.coin_id = coin_id;
            }
            if let Some(user_handle) = dashboard.user_handle {
                config.user_handle = user_handle;
            }
        }
        if let Some(endpoints) = self.endpoints {
            if let Some(weather) = endpoints.weather {
                config.weather_endpoint = weather;
            }
            if let Some(price) = endpoints.price {
                config.price_endpoint = price;
            }
            if let Some(repos) = endpoints.repos {
                config.repos_endpoint = repos;
            }
            if let Some(location) = endpoints.location {
                config.location_endpoint = location;
            }
        }
        if let Some(cache) = self.cache {
            if let Some(path) = cache.path {
                config.cache_path = path;
            }
        }
    }
}

impl CliConfig {
    /// Parse CLI arguments, then layer the optional TOML file on top.
    #[cfg(feature = "cli")]
    pub fn load() -> Result<Self> {
        let mut config = Self::parse();
        if let Some(path) = config.config.clone() {
            TomlConfig::from_file(&path)?.apply(&mut config);
        }
        Ok(config)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("coin_id", &self.coin_id)?;
        validate_url("weather_endpoint", &self.weather_endpoint)?;
        validate_url("price_endpoint", &self.price_endpoint)?;
        validate_url("repos_endpoint", &self.repos_endpoint)?;
        validate_url("location_endpoint", &self.location_endpoint)?;
        validate_path("cache_path", &self.cache_path)?;
        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn coin_id(&self) -> &str {
        &self.coin_id
    }

    fn user_handle(&self) -> &str {
        &self.user_handle
    }

    fn weather_endpoint(&self) -> &str {
        &self.weather_endpoint
    }

    fn price_endpoint(&self) -> &str {
        &self.price_endpoint
    }

    fn repos_endpoint(&self) -> &str {
        &self.repos_endpoint
    }

    fn location_endpoint(&self) -> &str {
        &self.location_endpoint
    }

    fn cache_path(&self) -> &str {
        &self.cache_path
    }
}
