//! Wallet lookup domain: model, payload normalization, record store.

pub mod models;
pub mod normalize;
pub mod store;

pub use models::{ADDRESS_PREFIX, NewWalletLookup, WalletLookup, is_valid_address};
pub use normalize::{NormalizeError, normalize, sun_to_trx};
pub use store::{MemoryWalletStore, PgWalletStore, WalletStore, init_schema};
