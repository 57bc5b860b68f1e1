//! 核心数据模型定义
//!
//! 序列化格式与本地存储中的 JSON 布局保持一致（camelCase 字段名，
//! 缺省的可选字段不写入）。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 医生档案（每个安装实例仅保存一份）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorProfile {
    pub name: String,                // 医生姓名
    pub degree: String,              // 学位/职称
    pub registration_number: String, // 执业注册号
    pub phone: String,               // 联系电话
    pub hospital: String,            // 医院/诊所名称
    pub address: String,             // 执业地址
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>, // base64 编码的签名图片
}

/// 单条用药记录
///
/// 始终内嵌在处方（或表单草稿列表）中，保存后不可修改。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medication {
    #[serde(default)]
    pub id: String, // 药品条目标识符，格式 med_<毫秒时间戳>；草稿可缺省，组装时补齐
    pub name: String,      // 药品名称
    pub strength: String,  // 规格 (如 500mg)
    pub dose: String,      // 单次剂量
    pub route: String,     // 给药途径
    pub frequency: String, // 用药频次
    pub duration: String,  // 疗程
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>, // 总量
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>, // 用药说明
}

/// 性别枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
            Gender::Other => write!(f, "other"),
        }
    }
}

/// 身高单位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    Cm,
    Ft,
}

impl Default for HeightUnit {
    fn default() -> Self {
        HeightUnit::Cm
    }
}

/// 体重单位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Kg,
    Lbs,
}

impl Default for WeightUnit {
    fn default() -> Self {
        WeightUnit::Kg
    }
}

impl std::fmt::Display for HeightUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeightUnit::Cm => write!(f, "cm"),
            HeightUnit::Ft => write!(f, "ft"),
        }
    }
}

impl std::fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeightUnit::Kg => write!(f, "kg"),
            WeightUnit::Lbs => write!(f, "lbs"),
        }
    }
}

/// 患者就诊信息
///
/// 仅作为处方内嵌值或表单草稿存在，不单独持久化。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub name: String,   // 患者姓名
    pub dob: String,    // 出生日期（约定为 ISO 日期字符串，不强制校验格式）
    pub gender: Gender, // 性别
    pub mobile: String, // 手机号
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>, // 住址
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>, // 身高
    #[serde(default)]
    pub height_unit: HeightUnit, // 身高单位，默认 cm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>, // 体重
    #[serde(default)]
    pub weight_unit: WeightUnit, // 体重单位，默认 kg
    pub chief_complaint: String, // 主诉
    pub diagnosis: String,       // 诊断
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>, // 备注
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followup_date: Option<String>, // 复诊日期
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followup_time: Option<String>, // 复诊时间
}

/// 处方记录
///
/// 生成时一次性构建，此后不可变更；doctor_data 是生成时医生档案的
/// 值拷贝，后续档案修改不影响已有处方。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    pub id: String,                // 处方标识符，格式 RX<毫秒时间戳>
    pub patient_data: Patient,     // 患者信息
    pub medications: Vec<Medication>, // 用药列表，顺序即打印顺序
    pub doctor_data: DoctorProfile, // 开方医生档案快照
    pub created_at: DateTime<Utc>, // 生成时间
    pub qr_code: String,           // 验证码，当前设计下等于处方标识符
}

fn default_true() -> bool {
    true
}

/// 应用设置（单例）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    #[serde(default = "default_true")]
    pub auto_save: bool, // 自动保存
    #[serde(default)]
    pub dark_mode: bool, // 深色模式
    #[serde(default = "default_true")]
    pub include_qr: bool, // 处方文档中包含验证码
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            auto_save: true,
            dark_mode: false,
            include_qr: true,
        }
    }
}
