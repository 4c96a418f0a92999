pub mod config;
pub mod core;
pub mod domain;
pub mod providers;
pub mod ui;
pub mod utils;

pub use crate::config::cli::FileStore;
pub use crate::config::CliConfig;

pub use crate::core::dashboard::{Dashboard, DEFAULT_HANDLE};
pub use crate::core::location::LocationCache;
pub use crate::core::panel::Panel;
pub use crate::providers::{
    geoip::IpGeoSource, price::CoinGeckoSource, repos::GithubRepoSource, weather::OpenMeteoSource,
};
pub use crate::utils::error::{DashError, ErrorKind, Result};
