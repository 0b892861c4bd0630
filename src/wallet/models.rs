//! Wallet lookup records.

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;

/// First character of every TRON base58check address
pub const ADDRESS_PREFIX: char = 'T';

/// Format check only. Base58check validation is the upstream indexer's job;
/// an address that passes here can still be unknown to the chain.
pub fn is_valid_address(address: &str) -> bool {
    !address.is_empty() && address.starts_with(ADDRESS_PREFIX)
}

/// A lookup result before persistence (`id` / `created_at` unassigned)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWalletLookup {
    pub address: String,
    /// Balance in TRX (major units), full precision up to 6 fractional digits
    pub trx_balance: Decimal,
    /// Free bandwidth limit, 0 when resource data was unavailable
    pub bandwidth: i64,
    /// Energy limit, 0 when resource data was unavailable
    pub energy: i64,
}

/// A persisted lookup record. Immutable after creation; there is no update
/// or delete path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletLookup {
    pub id: i64,
    pub address: String,
    pub trx_balance: Decimal,
    pub bandwidth: i64,
    pub energy: i64,
    /// Creation time in the reference display offset
    pub created_at: DateTime<FixedOffset>,
}
