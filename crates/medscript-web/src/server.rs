//! Web服务器

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use medscript_core::Result;

use crate::handlers::{
    api_root, create_prescription, delete_prescription, get_prescription, get_profile,
    get_settings, health, list_prescriptions, put_profile, put_settings, reset,
    verify_prescription, AppState,
};

pub struct WebServer {
    addr: SocketAddr,
    app: Router,
}

impl WebServer {
    pub fn new(addr: SocketAddr, state: Arc<AppState>) -> Self {
        let app = Self::create_app(state);
        Self { addr, app }
    }

    fn create_app(state: Arc<AppState>) -> Router {
        Router::new()
            // 根路径
            .route("/", get(api_root))
            // 健康检查
            .route("/health", get(health))
            // API路由
            .nest("/api/v1", api_routes())
            // 全局中间件
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(
                        CorsLayer::new()
                            .allow_origin(Any)
                            .allow_methods(Any)
                            .allow_headers(Any),
                    ),
            )
            .with_state(state)
    }

    pub async fn run(self) -> Result<()> {
        info!("Starting web server on {}", self.addr);

        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        axum::serve(listener, self.app).await?;

        Ok(())
    }
}

/// API v1 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/prescriptions",
            get(list_prescriptions).post(create_prescription),
        )
        .route(
            "/prescriptions/:id",
            get(get_prescription).delete(delete_prescription),
        )
        .route("/verify", post(verify_prescription))
        .route("/profile", get(get_profile).put(put_profile))
        .route("/settings", get(get_settings).put(put_settings))
        .route("/reset", post(reset))
}
