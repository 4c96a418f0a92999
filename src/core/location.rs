use crate::domain::model::Coordinates;
use crate::domain::ports::KeyValueStore;
use crate::utils::error::Result;

const LOCATION_KEY: &str = "location";

/// Zero-or-one persisted coordinate pair. Created on the first successful
/// acquisition, overwritten on later ones, never expired. A missing key is
/// the valid "no cached location" state.
pub struct LocationCache<K: KeyValueStore> {
    store: K,
}

impl<K: KeyValueStore> LocationCache<K> {
    pub fn new(store: K) -> Self {
        Self { store }
    }

    pub async fn get(&self) -> Result<Option<Coordinates>> {
        match self.store.get(LOCATION_KEY).await? {
            Some(raw) => {
                let coords: Coordinates = serde_json::from_str(&raw)?;
                Ok(Some(coords))
            }
            None => Ok(None),
        }
    }

    pub async fn store(&self, coords: Coordinates) -> Result<()> {
        let raw = serde_json::to_string(&coords)?;
        self.store.set(LOCATION_KEY, &raw).await
    }
}
