//! Wallet lookup orchestration.
//!
//! Stateless per request: validate the address, fetch account data, fetch
//! resource limits (best-effort), normalize, persist. A request either fully
//! succeeds (fetched + persisted) or fails with exactly one
//! [`LookupError`] kind; there is no partial success.

use std::sync::Arc;
use tracing::{error, warn};

use crate::error::LookupError;
use crate::trongrid::{TronGridClient, UpstreamError};
use crate::wallet::{WalletLookup, WalletStore, is_valid_address, normalize};

pub struct WalletService {
    client: TronGridClient,
    store: Arc<dyn WalletStore>,
}

impl WalletService {
    pub fn new(client: TronGridClient, store: Arc<dyn WalletStore>) -> Self {
        Self { client, store }
    }

    /// Fetch, persist and return wallet data for `address`.
    pub async fn lookup(&self, address: &str) -> Result<WalletLookup, LookupError> {
        // 1. Validate address format before any upstream call
        if !is_valid_address(address) {
            return Err(LookupError::InvalidInput(
                "address must be a non-empty string starting with 'T'",
            ));
        }

        // 2. Fetch account data; this call decides the fate of the request
        let account = match self.client.fetch_account(address).await {
            Ok(account) => account,
            Err(UpstreamError::Status { status, body }) => {
                warn!(address, status, body = %body, "upstream rejected account request");
                return Err(LookupError::NotFound);
            }
            Err(e @ UpstreamError::Exhausted { .. }) => {
                error!(address, error = %e, "account fetch exhausted retries");
                return Err(LookupError::UpstreamUnavailable);
            }
            Err(e) => {
                error!(address, error = %e, "account fetch failed");
                return Err(LookupError::Internal(e.to_string()));
            }
        };

        // 3. Fetch resource limits; failures degrade to zero limits instead
        //    of aborting the lookup
        let resources = match self.client.fetch_account_resources(address).await {
            Ok(resources) => Some(resources),
            Err(e) => {
                warn!(address, error = %e, "resource data unavailable, defaulting limits to zero");
                None
            }
        };

        // 4. Normalize; an empty data array means the address is unknown
        let new = normalize(address, &account, resources.as_ref())
            .map_err(|_| LookupError::NotFound)?;

        // 5. Persist; a fetch that cannot be recorded is a failed request
        let record = self.store.insert(new).await.map_err(|e| {
            error!(address, error = %e, "failed to persist lookup record");
            LookupError::Storage(e)
        })?;

        Ok(record)
    }

    /// Previously recorded lookups, newest first.
    pub async fn list_lookups(
        &self,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<WalletLookup>, LookupError> {
        self.store
            .list(skip, limit)
            .await
            .map_err(LookupError::Storage)
    }

    /// Store connectivity probe.
    pub async fn health(&self) -> Result<(), LookupError> {
        self.store.health_check().await.map_err(LookupError::Storage)
    }
}
