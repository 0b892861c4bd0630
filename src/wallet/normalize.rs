//! Upstream payload normalization.
//!
//! Converts raw TronGrid JSON into an unsaved [`NewWalletLookup`]. Missing
//! keys degrade to zero; an account with no data entries is the upstream's
//! way of saying the address does not exist.

use rust_decimal::Decimal;
use thiserror::Error;

use super::models::NewWalletLookup;
use crate::trongrid::{AccountResources, AccountResponse};

/// Sun per TRX
const SUN_PER_TRX: i64 = 1_000_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("account has no data entries")]
    NotFound,
}

/// Convert sun (minor units) to TRX (major units)
pub fn sun_to_trx(sun: i64) -> Decimal {
    Decimal::from(sun) / Decimal::from(SUN_PER_TRX)
}

/// Build an unsaved record from the account payload and, when available,
/// the resources payload. `resources: None` means the resource fetch failed
/// or was skipped; both limits default to zero in that case.
pub fn normalize(
    address: &str,
    account: &AccountResponse,
    resources: Option<&AccountResources>,
) -> Result<NewWalletLookup, NormalizeError> {
    let entry = account.data.first().ok_or(NormalizeError::NotFound)?;

    let (bandwidth, energy) = match resources {
        Some(r) => (r.free_net_limit, r.energy_limit),
        None => (0, 0),
    };

    Ok(NewWalletLookup {
        address: address.to_string(),
        trx_balance: sun_to_trx(entry.balance),
        bandwidth,
        energy,
    })
}
