pub mod booking;
pub mod facility;
pub mod member;

use database::services::{DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use serde::{Deserialize, Deserializer};
use utoipa::IntoParams;

/// Query string shared by the `/all` listing endpoints
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListParams {
    /// Maximum number of rows to return
    #[serde(default = "default_limit", deserialize_with = "deserialize_limit")]
    #[param(default = 10, minimum = 0, maximum = 9223372036854775807i64)]
    pub limit: u64,
}

fn default_limit() -> u64 {
    DEFAULT_LIST_LIMIT
}

/// The store binds `LIMIT` as a signed 64-bit integer
fn deserialize_limit<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let limit = u64::deserialize(deserializer)?;
    if limit > MAX_LIST_LIMIT {
        return Err(serde::de::Error::custom(format!(
            "limit must be at most {MAX_LIST_LIMIT}"
        )));
    }
    Ok(limit)
}
