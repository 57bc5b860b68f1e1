//! 键值存储后端

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use medscript_core::Result;

/// 按逻辑键读写字符串值的存储后端
///
/// 每个键只有"缺失"与"存在"两种可观察状态；整值读写，调用之间
/// 不暴露中间状态。
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// 读取键对应的值，缺失返回 None
    async fn read(&self, key: &str) -> Result<Option<String>>;

    /// 整值写入键
    async fn write(&self, key: &str, value: &str) -> Result<()>;

    /// 一步清空全部键
    async fn clear(&self) -> Result<()>;
}

/// 内存后端（测试与演示用）
pub struct MemoryBackend {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StorageBackend for MemoryBackend {
    async fn read(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.read().await;
        Ok(entries.get(key).cloned())
    }

    async fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.clear();
        Ok(())
    }
}
