//! # MedScript Web 模块
//!
//! 把处方生成、历史、验证与单例记录操作暴露为 REST 接口，
//! 表单界面是它的消费方。

pub mod handlers;
pub mod server;

pub use handlers::AppState;
pub use server::WebServer;
