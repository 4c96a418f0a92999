pub mod dashboard;
pub mod location;
pub mod panel;

pub use crate::domain::model::{
    Coordinates, PanelStatus, PriceQuote, RepoEntry, WeatherReading,
};
pub use crate::domain::ports::{ConfigProvider, KeyValueStore, LocationSource, PanelSource};
pub use crate::utils::error::Result;
