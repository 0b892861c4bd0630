//! Raw TronGrid payload shapes.
//!
//! Only the fields this service consumes are modelled; everything else in
//! the upstream JSON is ignored. Missing keys decode to zero / empty rather
//! than failing.

use serde::Deserialize;

/// `GET /v1/accounts/{address}` response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct AccountResponse {
    #[serde(default)]
    pub data: Vec<Account>,
}

/// One account entry. An address unknown to the indexer yields an empty
/// `data` array, not an error status.
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    /// Balance in sun (1 TRX = 1_000_000 sun)
    #[serde(default)]
    pub balance: i64,
}

/// `GET /v1/accounts/{address}/resources` response.
///
/// TronGrid's casing is inconsistent between the two fields; that is the
/// real wire format, not a typo.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountResources {
    #[serde(rename = "freeNetLimit", default)]
    pub free_net_limit: i64,
    #[serde(rename = "EnergyLimit", default)]
    pub energy_limit: i64,
}
