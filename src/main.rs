use mini_dash::domain::ports::ConfigProvider;
use mini_dash::utils::{logger, validation::Validate};
use mini_dash::{
    CliConfig, CoinGeckoSource, Dashboard, FileStore, GithubRepoSource, IpGeoSource,
    LocationCache, OpenMeteoSource,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::load()?;

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting mini-dash");
    if config.verbose {
        tracing::debug!("Config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let cache = LocationCache::new(FileStore::new(config.cache_path().to_string()));
    let dashboard = Dashboard::new(
        OpenMeteoSource::new(config.weather_endpoint().to_string()),
        CoinGeckoSource::new(config.price_endpoint().to_string()),
        GithubRepoSource::new(config.repos_endpoint().to_string()),
        IpGeoSource::new(config.location_endpoint().to_string()),
        cache,
        config.coin_id().to_string(),
        config.user_handle().to_string(),
    );

    if config.locate {
        match dashboard.acquire_location().await {
            Ok(coords) => {
                tracing::info!("📍 Location: {:.4}, {:.4}", coords.latitude, coords.longitude);
            }
            Err(e) => {
                tracing::warn!("⚠️ Location acquisition failed: {}", e);
                eprintln!("⚠️ {}", e);
            }
        }
    }

    dashboard.refresh().await;

    print!(
        "{}",
        mini_dash::ui::render_panel("Weather", &dashboard.weather_status(), "no location yet")
    );
    print!(
        "{}",
        mini_dash::ui::render_panel("Price", &dashboard.price_status(), "not loaded")
    );
    print!(
        "{}",
        mini_dash::ui::render_panel("Repositories", &dashboard.repos_status(), "not loaded")
    );

    Ok(())
}
