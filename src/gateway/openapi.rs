//! OpenAPI documentation, served through Swagger UI at `/docs`.

use utoipa::OpenApi;

use super::handlers;
use super::types::{WalletRecordResponse, WalletResponse};
use crate::error::ErrorBody;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "tronlens API",
        description = "TRON wallet lookup service backed by TronGrid",
        version = "0.1.0"
    ),
    paths(
        handlers::lookup_wallet,
        handlers::list_wallets,
        handlers::health_check
    ),
    components(schemas(
        WalletResponse,
        WalletRecordResponse,
        handlers::HealthResponse,
        ErrorBody
    )),
    tags(
        (name = "Wallet", description = "Wallet lookup and history"),
        (name = "System", description = "Service health")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_covers_all_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| p.as_str() == "/wallet"));
        assert!(paths.iter().any(|p| p.as_str() == "/wallets"));
        assert!(paths.iter().any(|p| p.as_str() == "/health"));
    }
}
