//! 错误定义模块

use serde::Serialize;
use thiserror::Error;

/// 单个字段的校验失败信息
///
/// `field` 使用持久化层的 camelCase 字段名，`message` 为表单层文案。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// 一次校验产生的全部字段错误
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{}", joined)
    }
}

/// 处方系统统一错误类型
#[derive(Error, Debug)]
pub enum MedScriptError {
    #[error("字段校验失败: {0}")]
    Validation(ValidationErrors),

    #[error("输入结构错误: {0}")]
    MalformedInput(String),

    #[error("医生档案尚未配置")]
    MissingProfile,

    #[error("处方中至少需要一种药品")]
    EmptyMedicationList,

    #[error("验证码不能为空")]
    EmptyCode,

    #[error("资源未找到: {0}")]
    NotFound(String),

    #[error("存储写入失败: {0}")]
    Persistence(String),

    #[error("存储数据损坏: {0}")]
    MalformedStorage(String),

    #[error("序列化错误: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),
}

/// 处方系统统一结果类型
pub type Result<T> = std::result::Result<T, MedScriptError>;
