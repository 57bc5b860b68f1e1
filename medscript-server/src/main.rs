//! MedScript服务器主程序

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use medscript_core::SystemIdGenerator;
use medscript_store::LocalFileBackend;
use medscript_web::{AppState, WebServer};

mod config;

use crate::config::ServerConfig;

/// MedScript服务器命令行参数
#[derive(Parser, Debug)]
#[command(name = "medscript-server")]
#[command(about = "MedScript 数字处方管理服务器")]
struct Args {
    /// 监听端口
    #[arg(short, long)]
    port: Option<u16>,

    /// 监听主机
    #[arg(long)]
    host: Option<String>,

    /// 本地数据目录
    #[arg(short, long)]
    data_dir: Option<String>,

    /// 配置文件路径
    #[arg(short, long)]
    config: Option<String>,

    /// 日志级别
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::load(args.config.as_deref())?;
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(data_dir) = args.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(log_level) = args.log_level {
        config.log_level = log_level;
    }

    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(config.log_level.as_str())
        .init();

    info!("启动MedScript服务器...");
    info!("MedScript服务器配置:");
    info!("  监听地址: {}:{}", config.host, config.port);
    info!("  数据目录: {}", config.data_dir);

    let backend = Arc::new(LocalFileBackend::new(&config.data_dir));
    let ids = Arc::new(SystemIdGenerator::new());
    let state = Arc::new(AppState::new(backend, ids));

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("Invalid listen address")?;

    let server = WebServer::new(addr, state);
    server.run().await?;

    Ok(())
}
