//! 文件后端的仓库列表存储
//!
//! 单个 JSON 数组文件，整体覆盖写。写入先落临时文件再原子
//! rename，并发写通过互斥锁串行化，避免写出半截文件。

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use errors::{AppError, AppResult};
use tokio::fs;
use tokio::sync::Mutex;

use crate::domain::repositories::WarehouseStore;

pub struct FileWarehouseStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileWarehouseStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }
}

#[async_trait]
impl WarehouseStore for FileWarehouseStore {
    async fn load(&self) -> AppResult<Option<Vec<String>>> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(AppError::internal(format!(
                    "Failed to read warehouse list: {}",
                    e
                )));
            }
        };

        let warehouses: Vec<String> = serde_json::from_slice(&bytes).map_err(|e| {
            AppError::internal(format!("Warehouse list file is corrupted: {}", e))
        })?;
        Ok(Some(warehouses))
    }

    async fn replace(&self, warehouses: &[String]) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::internal(format!("Failed to create settings directory: {}", e))
            })?;
        }

        let payload = serde_json::to_vec_pretty(warehouses)
            .map_err(|e| AppError::internal(format!("Failed to serialize warehouses: {}", e)))?;

        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, payload).await.map_err(|e| {
            AppError::internal(format!("Failed to write warehouse list: {}", e))
        })?;
        fs::rename(&tmp_path, &self.path).await.map_err(|e| {
            AppError::internal(format!("Failed to publish warehouse list: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> FileWarehouseStore {
        let path = std::env::temp_dir()
            .join(format!("inventory-test-{}-{}", std::process::id(), name))
            .join("warehouses.json");
        FileWarehouseStore::new(path)
    }

    #[tokio::test]
    async fn test_load_before_first_write_is_none() {
        let store = temp_store("unset");
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_replace_then_load() {
        let store = temp_store("roundtrip");
        let warehouses = vec!["A".to_string(), "B".to_string()];

        store.replace(&warehouses).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(warehouses));
    }

    #[tokio::test]
    async fn test_replace_is_full_overwrite() {
        let store = temp_store("overwrite");

        store
            .replace(&["A".to_string(), "B".to_string()])
            .await
            .unwrap();
        store.replace(&["C".to_string()]).await.unwrap();

        assert_eq!(store.load().await.unwrap(), Some(vec!["C".to_string()]));
    }

    #[tokio::test]
    async fn test_replace_with_empty_list() {
        let store = temp_store("empty");

        store.replace(&[]).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(vec![]));
    }
}
