//! tronlens - TRON wallet lookup service entry point.
//!
//! Startup order: config → logging → API key check → database → schema →
//! client/store/service wiring → gateway. The API key and the database are
//! hard requirements; the process refuses to start without them.

use std::sync::Arc;

use tronlens::config::AppConfig;
use tronlens::db::Database;
use tronlens::gateway;
use tronlens::service::WalletService;
use tronlens::trongrid::TronGridClient;
use tronlens::wallet::{PgWalletStore, init_schema};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let config = AppConfig::load(&env);
    let _log_guard = tronlens::logging::init_logging(&config);

    // The upstream rejects unauthenticated requests; refuse to start
    // without a key rather than fail on the first lookup.
    let api_key = match std::env::var("TRONGRID_API_KEY") {
        Ok(key) if !key.is_empty() => key,
        _ => {
            eprintln!("❌ FATAL: TRONGRID_API_KEY is not set");
            std::process::exit(1);
        }
    };

    let db = Database::connect(
        &config.storage.postgres_url,
        config.storage.max_connections,
    )
    .await?;
    init_schema(db.pool()).await?;

    let store = Arc::new(PgWalletStore::new(
        db.pool().clone(),
        config.storage.reference_offset(),
    ));
    let client = TronGridClient::new(&config.upstream, &api_key)?;
    let service = Arc::new(WalletService::new(client, store));

    tracing::info!(env = %env, upstream = %config.upstream.base_url, "tronlens starting");
    gateway::run_server(&config.gateway, service).await;

    Ok(())
}
