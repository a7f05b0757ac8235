use serde::Deserialize;

use super::{f64_from_text, i64_from_text, u64_from_text};

/// Uniswap v3 factory entity.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Factory {
    pub id: String,
    #[serde(deserialize_with = "u64_from_text")]
    pub pool_count: u64,
    #[serde(deserialize_with = "u64_from_text")]
    pub tx_count: u64,
    #[serde(rename = "totalVolumeUSD", deserialize_with = "f64_from_text")]
    pub total_volume_usd: f64,
    #[serde(rename = "totalValueLockedUSD", deserialize_with = "f64_from_text")]
    pub total_value_locked_usd: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Token {
    pub symbol: String,
}

fn pair_label(token0: &Token, token1: &Token) -> String {
    format!("{}-{}", token0.symbol, token1.symbol)
}

/// Pool entity as returned by the pool listing.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Pool {
    pub id: String,
    pub token0: Token,
    pub token1: Token,
    #[serde(rename = "volumeUSD", deserialize_with = "f64_from_text")]
    pub volume_usd: f64,
}

impl Pool {
    pub fn pair(&self) -> String {
        pair_label(&self.token0, &self.token1)
    }
}

/// Pool reference nested in a [`PoolDayData`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PoolRef {
    pub id: String,
    pub token0: Token,
    pub token1: Token,
}

impl PoolRef {
    pub fn pair(&self) -> String {
        pair_label(&self.token0, &self.token1)
    }
}

/// Protocol-wide daily summary.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniswapDayData {
    pub id: String,
    #[serde(deserialize_with = "i64_from_text")]
    pub date: i64,
    #[serde(rename = "volumeUSD", deserialize_with = "f64_from_text")]
    pub volume_usd: f64,
    #[serde(rename = "tvlUSD", deserialize_with = "f64_from_text")]
    pub tvl_usd: f64,
    #[serde(deserialize_with = "u64_from_text")]
    pub tx_count: u64,
}

/// Daily summary of a single pool.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolDayData {
    pub id: String,
    #[serde(deserialize_with = "i64_from_text")]
    pub date: i64,
    pub pool: PoolRef,
    #[serde(rename = "tvlUSD", deserialize_with = "f64_from_text")]
    pub tvl_usd: f64,
    #[serde(rename = "volumeUSD", deserialize_with = "f64_from_text")]
    pub volume_usd: f64,
    #[serde(deserialize_with = "u64_from_text")]
    pub tx_count: u64,
}

/// Swap event with signed token deltas from the pool's perspective.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Swap {
    pub id: String,
    #[serde(deserialize_with = "i64_from_text")]
    pub timestamp: i64,
    #[serde(deserialize_with = "f64_from_text")]
    pub amount0: f64,
    #[serde(deserialize_with = "f64_from_text")]
    pub amount1: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PoolSwaps {
    pub(crate) swaps: Vec<Swap>,
}
