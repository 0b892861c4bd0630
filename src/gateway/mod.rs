//! axum transport adapter: routing, DTO shaping, error mapping. The read
//! path and the lookup path both go through [`crate::service::WalletService`].

pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::GatewayConfig;
use crate::service::WalletService;
use state::AppState;

/// Build the application router. Split out from [`run_server`] so tests can
/// serve it on an ephemeral port.
pub fn router(service: Arc<WalletService>) -> Router {
    let state = AppState::new(service);

    Router::new()
        .route("/wallet", post(handlers::lookup_wallet))
        .route("/wallets", get(handlers::list_wallets))
        .route("/health", get(handlers::health_check))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

/// Start the HTTP gateway server. Does not return on success.
pub async fn run_server(config: &GatewayConfig, service: Arc<WalletService>) {
    let app = router(service);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("❌ FATAL: Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    println!("🚀 Gateway listening on http://{}", addr);
    println!("📖 API Docs: http://{}/docs", addr);
    tracing::info!("gateway listening on {}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("❌ FATAL: Server error: {}", e);
        std::process::exit(1);
    }
}
