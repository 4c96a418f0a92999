use httpmock::prelude::*;
use mini_dash::domain::model::{Coordinates, PanelStatus};
use mini_dash::{
    CoinGeckoSource, Dashboard, ErrorKind, FileStore, GithubRepoSource, IpGeoSource,
    LocationCache, OpenMeteoSource, DEFAULT_HANDLE,
};
use tempfile::TempDir;

fn build_dashboard(
    server: &MockServer,
    cache_dir: &TempDir,
    coin_id: &str,
    user_handle: &str,
) -> Dashboard<OpenMeteoSource, CoinGeckoSource, GithubRepoSource, IpGeoSource, FileStore> {
    let store = FileStore::new(cache_dir.path().to_str().unwrap().to_string());
    Dashboard::new(
        OpenMeteoSource::new(server.url("/v1/forecast")),
        CoinGeckoSource::new(server.url("/simple/price")),
        GithubRepoSource::new(server.url("")),
        IpGeoSource::new(server.url("/geo/json")),
        LocationCache::new(store),
        coin_id.to_string(),
        user_handle.to_string(),
    )
}

async fn seed_cached_location(cache_dir: &TempDir, coords: Coordinates) {
    use mini_dash::domain::ports::KeyValueStore;
    let store = FileStore::new(cache_dir.path().to_str().unwrap().to_string());
    store
        .set("location", &serde_json::to_string(&coords).unwrap())
        .await
        .unwrap();
}

fn weather_body() -> serde_json::Value {
    serde_json::json!({
        "current": {
            "temperature_2m": 11.2,
            "apparent_temperature": 9.4,
            "relative_humidity_2m": 78,
            "wind_speed_10m": 14.3
        }
    })
}

#[tokio::test]
async fn refresh_loads_all_three_panels_with_cached_location() {
    let server = MockServer::start();
    let cache_dir = TempDir::new().unwrap();
    seed_cached_location(&cache_dir, Coordinates::new(51.5, -0.12).unwrap()).await;

    let weather_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/forecast")
            .query_param("latitude", "51.5")
            .query_param("longitude", "-0.12");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(weather_body());
    });
    let price_mock = server.mock(|when, then| {
        when.method(GET).path("/simple/price").query_param("ids", "bitcoin");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"bitcoin": {"usd": 64250.0, "usd_24h_change": 1.2}}));
    });
    let repos_mock = server.mock(|when, then| {
        when.method(GET).path("/users/alice/repos");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([{
                "name": "dotfiles",
                "stargazers_count": 4,
                "updated_at": "2026-08-28T10:00:00Z",
                "html_url": "https://example.com/dotfiles"
            }]));
    });

    let dashboard = build_dashboard(&server, &cache_dir, "bitcoin", "alice");
    dashboard.refresh().await;

    weather_mock.assert();
    price_mock.assert();
    repos_mock.assert();

    match dashboard.weather_status() {
        PanelStatus::Ready(reading) => {
            assert_eq!(reading.temperature_c, 11.2);
            assert_eq!(
                reading.coordinates,
                Coordinates::new(51.5, -0.12).unwrap()
            );
        }
        other => panic!("unexpected weather status: {:?}", other),
    }
    match dashboard.price_status() {
        PanelStatus::Ready(quote) => assert_eq!(quote.price_usd, 64250.0),
        other => panic!("unexpected price status: {:?}", other),
    }
    match dashboard.repos_status() {
        PanelStatus::Ready(repos) => assert_eq!(repos[0].name, "dotfiles"),
        other => panic!("unexpected repos status: {:?}", other),
    }
}

#[tokio::test]
async fn refresh_without_cached_location_skips_weather() {
    let server = MockServer::start();
    let cache_dir = TempDir::new().unwrap();

    let weather_mock = server.mock(|when, then| {
        when.method(GET).path("/v1/forecast");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(weather_body());
    });
    server.mock(|when, then| {
        when.method(GET).path("/simple/price");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"bitcoin": {"usd": 64250.0}}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/users/alice/repos");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([]));
    });

    let dashboard = build_dashboard(&server, &cache_dir, "bitcoin", "alice");
    dashboard.refresh().await;

    weather_mock.assert_hits(0);
    assert_eq!(dashboard.weather_status(), PanelStatus::Idle);
    // An empty repository list is still a successful load.
    assert_eq!(dashboard.repos_status(), PanelStatus::Ready(vec![]));
}

#[tokio::test]
async fn one_failing_source_does_not_poison_the_others() {
    let server = MockServer::start();
    let cache_dir = TempDir::new().unwrap();
    seed_cached_location(&cache_dir, Coordinates::new(51.5, -0.12).unwrap()).await;

    server.mock(|when, then| {
        when.method(GET).path("/v1/forecast");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(weather_body());
    });
    server.mock(|when, then| {
        when.method(GET).path("/simple/price");
        then.status(500);
    });
    server.mock(|when, then| {
        when.method(GET).path("/users/alice/repos");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([]));
    });

    let dashboard = build_dashboard(&server, &cache_dir, "bitcoin", "alice");
    dashboard.refresh().await;

    assert_eq!(
        dashboard.price_status(),
        PanelStatus::Failed(ErrorKind::Unavailable)
    );
    assert!(matches!(dashboard.weather_status(), PanelStatus::Ready(_)));
    assert_eq!(dashboard.repos_status(), PanelStatus::Ready(vec![]));
}

#[tokio::test]
async fn blank_handle_uses_the_default_handle() {
    let server = MockServer::start();
    let cache_dir = TempDir::new().unwrap();

    server.mock(|when, then| {
        when.method(GET).path("/simple/price");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"bitcoin": {"usd": 64250.0}}));
    });
    let repos_mock = server.mock(|when, then| {
        when.method(GET)
            .path(format!("/users/{}/repos", DEFAULT_HANDLE));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([]));
    });

    let dashboard = build_dashboard(&server, &cache_dir, "bitcoin", "   ");
    dashboard.refresh().await;

    repos_mock.assert();
}

#[tokio::test]
async fn malformed_repo_body_fails_only_the_repo_panel() {
    let server = MockServer::start();
    let cache_dir = TempDir::new().unwrap();

    server.mock(|when, then| {
        when.method(GET).path("/simple/price");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"bitcoin": {"usd": 64250.0}}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/users/alice/repos");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"message": "rate limited"}));
    });

    let dashboard = build_dashboard(&server, &cache_dir, "bitcoin", "alice");
    dashboard.refresh().await;

    assert_eq!(
        dashboard.repos_status(),
        PanelStatus::Failed(ErrorKind::MalformedResponse)
    );
    assert!(matches!(dashboard.price_status(), PanelStatus::Ready(_)));
}
