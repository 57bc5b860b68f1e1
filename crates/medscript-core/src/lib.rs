//! # MedScript Core
//!
//! 处方系统的核心模块，提供基础数据结构、字段校验、错误定义与标识符生成。

pub mod error;
pub mod ident;
pub mod models;
pub mod validation;

pub use error::{FieldError, MedScriptError, Result, ValidationErrors};
pub use ident::{IdGenerator, SystemIdGenerator};
pub use models::*;
pub use validation::{parse_entity, Validate};
