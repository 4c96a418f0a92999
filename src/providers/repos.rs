use crate::domain::model::RepoEntry;
use crate::domain::ports::PanelSource;
use crate::providers::{require_str, require_u64};
use crate::utils::error::{DashError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::header::USER_AGENT;
use reqwest::Client;
use serde_json::Value;

const MAX_ENTRIES: usize = 5;

/// GitHub style per-user repository listing, most recently updated first.
/// The server is asked for at most five entries and the cap is applied again
/// locally; server order is preserved as-is.
pub struct GithubRepoSource {
    client: Client,
    base_url: String,
}

impl GithubRepoSource {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl PanelSource for GithubRepoSource {
    type Input = String;
    type Output = Vec<RepoEntry>;

    async fn fetch(&self, handle: String) -> Result<Vec<RepoEntry>> {
        let url = format!("{}/users/{}/repos", self.base_url, handle);
        tracing::debug!(url = %url, "requesting repositories");
        let response = self
            .client
            .get(&url)
            .header(USER_AGENT, "mini-dash")
            .query(&[("sort", "updated"), ("per_page", "5")])
            .send()
            .await?
            .error_for_status()?;

        let body: Value = response.json().await?;
        let items = body.as_array().ok_or_else(|| DashError::MalformedResponse {
            message: "repository response is not a list".to_string(),
        })?;

        items
            .iter()
            .take(MAX_ENTRIES)
            .map(parse_entry)
            .collect::<Result<Vec<_>>>()
    }
}

fn parse_entry(item: &Value) -> Result<RepoEntry> {
    let updated_raw = require_str(item, "updated_at")?;
    let updated_at = DateTime::parse_from_rfc3339(updated_raw)
        .map_err(|e| DashError::MalformedResponse {
            message: format!("bad 'updated_at' timestamp: {}", e),
        })?
        .with_timezone(&Utc);

    Ok(RepoEntry {
        name: require_str(item, "name")?.to_string(),
        stars: require_u64(item, "stargazers_count")?,
        updated_at,
        url: require_str(item, "html_url")?.to_string(),
    })
}
