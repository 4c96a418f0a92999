use crate::domain::ports::KeyValueStore;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// File-backed key/value store: one `<key>.json` file per key under a base
/// directory. Backs the persistent location cache across runs.
#[derive(Debug, Clone)]
pub struct FileStore {
    base_path: String,
}

impl FileStore {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn path_for(&self, key: &str) -> std::path::PathBuf {
        Path::new(&self.base_path).join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let full_path = self.path_for(key);
        match fs::read_to_string(&full_path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let full_path = self.path_for(key);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(full_path, value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn missing_key_is_none_not_error() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().to_str().unwrap().to_string());
        assert_eq!(store.get("location").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().to_str().unwrap().to_string());
        store.set("location", r#"{"latitude":40.7}"#).await.unwrap();
        assert_eq!(
            store.get("location").await.unwrap(),
            Some(r#"{"latitude":40.7}"#.to_string())
        );
    }

    #[tokio::test]
    async fn values_survive_a_new_store_over_the_same_directory() {
        let dir = TempDir::new().unwrap();
        let base = dir.path().to_str().unwrap().to_string();

        let store = FileStore::new(base.clone());
        store.set("location", "persisted").await.unwrap();
        drop(store);

        let reopened = FileStore::new(base);
        assert_eq!(
            reopened.get("location").await.unwrap(),
            Some("persisted".to_string())
        );
    }

    #[tokio::test]
    async fn set_creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("deep").join("cache");
        let store = FileStore::new(nested.to_str().unwrap().to_string());
        store.set("location", "x").await.unwrap();
        assert_eq!(store.get("location").await.unwrap(), Some("x".to_string()));
    }
}
