//! # MedScript 工作流模块
//!
//! 提供处方记录生命周期的核心操作，包括：
//! - 处方生成：校验前置条件，组装不可变处方并提交存储
//! - 验证查找：按验证码确认处方真伪
//! - 历史管理：已开处方的搜索与删除

pub mod assembly;
pub mod history;
pub mod verification;

// 重新导出主要类型
pub use assembly::PrescriptionAssembler;
pub use history::PrescriptionHistory;
pub use verification::VerificationService;
