//! HTTP handlers. Thin adapters over [`crate::service::WalletService`]; no
//! business logic lives here.

use std::time::{SystemTime, UNIX_EPOCH};

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use utoipa::ToSchema;

use super::state::AppState;
use super::types::{ListParams, LookupParams, WalletRecordResponse, WalletResponse};
use crate::error::LookupError;

/// Look up a wallet and record the result
///
/// POST /wallet?address=...
#[utoipa::path(
    post,
    path = "/wallet",
    params(
        ("address" = String, Query, description = "TRON wallet address (starts with 'T')")
    ),
    responses(
        (status = 200, description = "Balance and resource limits", body = WalletResponse, content_type = "application/json"),
        (status = 400, description = "Invalid address format", body = crate::error::ErrorBody),
        (status = 404, description = "Address not found upstream", body = crate::error::ErrorBody),
        (status = 502, description = "Upstream unavailable", body = crate::error::ErrorBody),
        (status = 500, description = "Storage or internal failure", body = crate::error::ErrorBody)
    ),
    tag = "Wallet"
)]
pub async fn lookup_wallet(
    State(state): State<AppState>,
    Query(params): Query<LookupParams>,
) -> Result<Json<WalletResponse>, LookupError> {
    let record = state.service.lookup(&params.address).await?;
    Ok(Json(WalletResponse::from_record(&record)))
}

/// List recorded lookups, newest first
///
/// GET /wallets?skip=0&limit=10
#[utoipa::path(
    get,
    path = "/wallets",
    params(
        ("skip" = i64, Query, description = "Records to skip (default 0)"),
        ("limit" = i64, Query, description = "Maximum records to return (default 10)")
    ),
    responses(
        (status = 200, description = "Recorded lookups", body = [WalletRecordResponse], content_type = "application/json"),
        (status = 400, description = "Invalid pagination", body = crate::error::ErrorBody)
    ),
    tag = "Wallet"
)]
pub async fn list_wallets(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<WalletRecordResponse>>, LookupError> {
    if params.skip < 0 {
        return Err(LookupError::InvalidInput("skip must be non-negative"));
    }
    if params.limit <= 0 {
        return Err(LookupError::InvalidInput("limit must be positive"));
    }

    let records = state.service.list_lookups(params.skip, params.limit).await?;
    Ok(Json(
        records.iter().map(WalletRecordResponse::from_record).collect(),
    ))
}

/// Health check response data
#[derive(serde::Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: &'static str,
    /// Server timestamp in milliseconds
    #[schema(example = 1703494800000_u64)]
    pub timestamp_ms: u64,
}

/// Health check endpoint
///
/// Pings the store; exposes no internal detail in the response.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse, content_type = "application/json"),
        (status = 503, description = "Service unavailable")
    ),
    tag = "System"
)]
pub async fn health_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let timestamp_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    match state.service.health().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                timestamp_ms,
            }),
        ),
        Err(e) => {
            tracing::error!(error = %e, "store health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unavailable",
                    timestamp_ms,
                }),
            )
        }
    }
}
