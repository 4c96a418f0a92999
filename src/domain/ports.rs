use crate::domain::model::Coordinates;
use crate::utils::error::Result;
use async_trait::async_trait;

/// One remote data source backing one panel. A single fetch per call; the
/// panel layer owns retries-by-reinvocation and all state bookkeeping.
#[async_trait]
pub trait PanelSource: Send + Sync {
    type Input: Send + Clone + 'static;
    type Output: Send + Clone + 'static;

    async fn fetch(&self, input: Self::Input) -> Result<Self::Output>;
}

/// One-shot device/network positioning capability.
#[async_trait]
pub trait LocationSource: Send + Sync {
    async fn acquire(&self) -> Result<Coordinates>;
}

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str)
        -> impl std::future::Future<Output = Result<Option<String>>> + Send;
    fn set(
        &self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn coin_id(&self) -> &str;
    fn user_handle(&self) -> &str;
    fn weather_endpoint(&self) -> &str;
    fn price_endpoint(&self) -> &str;
    fn repos_endpoint(&self) -> &str;
    fn location_endpoint(&self) -> &str;
    fn cache_path(&self) -> &str;
}
