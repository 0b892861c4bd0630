//! Gateway DTOs.
//!
//! Response shaping happens here: balances are rounded to 6 decimal places
//! at this boundary only (storage keeps full precision), and timestamps are
//! rendered in the reference offset they were stamped with. Amounts
//! serialize as strings to avoid float precision loss.

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::wallet::WalletLookup;

/// `POST /wallet` query input
#[derive(Debug, Deserialize)]
pub struct LookupParams {
    pub address: String,
}

/// `GET /wallets` pagination input
#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    10
}

/// Lookup result returned by `POST /wallet`
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WalletResponse {
    /// Queried wallet address
    #[schema(example = "TF5Bn4qJKMWeQJShR6D1WpAxh53m5BMp6d")]
    pub address: String,
    /// Balance in TRX, rounded to 6 decimal places
    #[schema(value_type = String, example = "1.5")]
    pub trx_balance: Decimal,
    /// Free bandwidth limit
    #[schema(example = 5000)]
    pub bandwidth: i64,
    /// Energy limit
    #[schema(example = 1000)]
    pub energy: i64,
}

impl WalletResponse {
    pub fn from_record(record: &WalletLookup) -> Self {
        Self {
            address: record.address.clone(),
            trx_balance: shape_balance(record.trx_balance),
            bandwidth: record.bandwidth,
            energy: record.energy,
        }
    }
}

/// Persisted record returned by `GET /wallets`
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WalletRecordResponse {
    #[schema(example = 1)]
    pub id: i64,
    pub address: String,
    #[schema(value_type = String, example = "1.5")]
    pub trx_balance: Decimal,
    pub bandwidth: i64,
    pub energy: i64,
    /// Creation time in the reference display offset
    pub created_at: DateTime<FixedOffset>,
}

impl WalletRecordResponse {
    pub fn from_record(record: &WalletLookup) -> Self {
        Self {
            id: record.id,
            address: record.address.clone(),
            trx_balance: shape_balance(record.trx_balance),
            bandwidth: record.bandwidth,
            energy: record.energy,
            created_at: record.created_at,
        }
    }
}

/// Round to 6 decimal places and strip trailing zeros so freshly computed
/// and database-loaded values render identically.
fn shape_balance(balance: Decimal) -> Decimal {
    balance.round_dp(6).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::str::FromStr;

    fn record(balance: &str) -> WalletLookup {
        WalletLookup {
            id: 7,
            address: "TF5Bn4qJKMWeQJShR6D1WpAxh53m5BMp6d".to_string(),
            trx_balance: Decimal::from_str(balance).unwrap(),
            bandwidth: 5000,
            energy: 1000,
            created_at: FixedOffset::east_opt(7 * 3600)
                .unwrap()
                .with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_balance_rounded_to_six_places() {
        let resp = WalletResponse::from_record(&record("0.12345678"));
        assert_eq!(resp.trx_balance, Decimal::from_str("0.123457").unwrap());
    }

    #[test]
    fn test_balance_shape_is_stable_across_scales() {
        // "1" (fresh division result) and "1.000000" (NUMERIC(12,6) column)
        // must serialize the same way
        let fresh = WalletResponse::from_record(&record("1"));
        let loaded = WalletResponse::from_record(&record("1.000000"));
        assert_eq!(
            serde_json::to_string(&fresh.trx_balance).unwrap(),
            serde_json::to_string(&loaded.trx_balance).unwrap()
        );
    }

    #[test]
    fn test_response_keys_are_camel_case() {
        let json = serde_json::to_value(WalletRecordResponse::from_record(&record("1.5"))).unwrap();
        assert!(json.get("trxBalance").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("trx_balance").is_none());
    }

    #[test]
    fn test_created_at_rendered_with_reference_offset() {
        let json = serde_json::to_value(WalletRecordResponse::from_record(&record("1"))).unwrap();
        let created_at = json["createdAt"].as_str().unwrap();
        assert!(created_at.ends_with("+07:00"), "got {}", created_at);
    }

    #[test]
    fn test_list_params_defaults() {
        let params: ListParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.skip, 0);
        assert_eq!(params.limit, 10);
    }
}
