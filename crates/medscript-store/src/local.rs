//! 本地文件后端

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use medscript_core::{MedScriptError, Result};

use crate::backend::StorageBackend;

/// 以目录为根的文件后端，每个键对应一个 `<key>.json` 文件
pub struct LocalFileBackend {
    root: PathBuf,
}

impl LocalFileBackend {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

#[async_trait]
impl StorageBackend for LocalFileBackend {
    async fn read(&self, key: &str) -> Result<Option<String>> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn write(&self, key: &str, value: &str) -> Result<()> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| MedScriptError::Persistence(e.to_string()))?;
        tokio::fs::write(self.path_for(key), value)
            .await
            .map_err(|e| MedScriptError::Persistence(format!("key {}: {}", key, e)))?;
        debug!("Wrote {} bytes to key {}", value.len(), key);
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_dir_all(&self.root).await {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(MedScriptError::Persistence(e.to_string())),
        }
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| MedScriptError::Persistence(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_root(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("medscript-{}-{}", name, std::process::id()))
    }

    #[tokio::test]
    async fn test_file_round_trip() {
        let backend = LocalFileBackend::new(temp_root("round-trip"));
        backend.clear().await.unwrap();

        assert_eq!(backend.read("prescriptions").await.unwrap(), None);
        backend.write("prescriptions", "[]").await.unwrap();
        assert_eq!(
            backend.read("prescriptions").await.unwrap(),
            Some("[]".to_string())
        );

        backend.clear().await.unwrap();
        assert_eq!(backend.read("prescriptions").await.unwrap(), None);
    }
}
