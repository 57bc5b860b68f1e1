//! 处方存储操作
//!
//! 读路径对损坏数据降级为"无数据"并记录日志；写路径失败则向上抛出，
//! 调用方负责向用户呈现并保留内存中的草稿。

use std::collections::HashMap;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use medscript_core::{AppSettings, DoctorProfile, MedScriptError, Prescription, Result};

use crate::backend::StorageBackend;

/// 本组件拥有的存储键
pub mod keys {
    pub const DOCTOR_PROFILE: &str = "doctorProfile";
    pub const APP_SETTINGS: &str = "appSettings";
    pub const PRESCRIPTIONS: &str = "prescriptions";
    pub const QR_VERIFICATION: &str = "qrVerification";
}

/// 面向处方领域的存储操作接口
pub struct PrescriptionStore {
    backend: Arc<dyn StorageBackend>,
}

impl PrescriptionStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// 容错读取：键缺失、读取失败或内容损坏都按"无数据"处理
    async fn read_or_default<T>(&self, key: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        let raw = match self.backend.read(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return T::default(),
            Err(e) => {
                warn!("Failed to read key {}, treating as absent: {}", key, e);
                return T::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                let corrupt = MedScriptError::MalformedStorage(format!("key {}: {}", key, e));
                warn!("Corrupt stored value, treating as absent: {}", corrupt);
                T::default()
            }
        }
    }

    async fn write_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.backend.write(key, &raw).await
    }

    /// 全部已存储处方，最新的在前
    pub async fn list_prescriptions(&self) -> Vec<Prescription> {
        self.read_or_default(keys::PRESCRIPTIONS).await
    }

    /// 保存一张处方：插入列表头部并整表重写，同时扩展验证码索引
    pub async fn save_prescription(&self, prescription: &Prescription) -> Result<()> {
        let mut prescriptions = self.list_prescriptions().await;
        prescriptions.insert(0, prescription.clone());
        self.write_json(keys::PRESCRIPTIONS, &prescriptions).await?;

        let mut index: HashMap<String, String> = self.read_or_default(keys::QR_VERIFICATION).await;
        index.insert(prescription.qr_code.clone(), prescription.id.clone());
        self.write_json(keys::QR_VERIFICATION, &index).await?;

        debug!("Saved prescription {}", prescription.id);
        Ok(())
    }

    /// 按标识符查找处方（列表线性扫描）
    pub async fn get_prescription_by_id(&self, id: &str) -> Option<Prescription> {
        self.list_prescriptions()
            .await
            .into_iter()
            .find(|p| p.id == id)
    }

    /// 删除指定处方
    ///
    /// 验证码索引不做清理：查找始终以处方列表为准，残留的索引项是
    /// 不可达的死数据。
    pub async fn delete_prescription(&self, id: &str) -> Result<()> {
        let mut prescriptions = self.list_prescriptions().await;
        prescriptions.retain(|p| p.id != id);
        self.write_json(keys::PRESCRIPTIONS, &prescriptions).await?;
        debug!("Deleted prescription {}", id);
        Ok(())
    }

    /// 验证码到处方标识符的派生索引
    pub async fn qr_index(&self) -> HashMap<String, String> {
        self.read_or_default(keys::QR_VERIFICATION).await
    }

    /// 医生档案（单例），未配置时返回 None
    pub async fn doctor_profile(&self) -> Option<DoctorProfile> {
        self.read_or_default(keys::DOCTOR_PROFILE).await
    }

    /// 覆盖写入医生档案
    pub async fn set_doctor_profile(&self, profile: &DoctorProfile) -> Result<()> {
        self.write_json(keys::DOCTOR_PROFILE, profile).await
    }

    /// 应用设置（单例），缺失时返回默认值
    pub async fn settings(&self) -> AppSettings {
        self.read_or_default(keys::APP_SETTINGS).await
    }

    /// 覆盖写入应用设置
    pub async fn set_settings(&self, settings: &AppSettings) -> Result<()> {
        self.write_json(keys::APP_SETTINGS, settings).await
    }

    /// 一步清空本组件拥有的全部数据（重置安装）
    pub async fn clear_all(&self) -> Result<()> {
        self.backend.clear().await
    }
}
