//! # MedScript 存储模块
//!
//! 负责处方、医生档案、应用设置与验证码索引在单机安装内的本地持久化。

pub mod backend;
pub mod local;
pub mod store;

pub use backend::{MemoryBackend, StorageBackend};
pub use local::LocalFileBackend;
pub use store::{keys, PrescriptionStore};
