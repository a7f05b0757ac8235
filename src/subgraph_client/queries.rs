use std::{collections::BTreeSet, fmt};

use super::{
    errors::{Error, Result},
    params::Variables,
};

const FACTORY_QUERY: &str = r#"
query factory($id: String!) {
  factory(id: $id) {
    id
    poolCount
    txCount
    totalVolumeUSD
    totalValueLockedUSD
  }
}
"#;

const POOLS_QUERY: &str = r#"
query allPools($first: Int!, $skip: Int!) {
  pools(
    first: $first
    skip: $skip
    orderBy: volumeUSD
    orderDirection: desc
  ) {
    id
    token0 { symbol }
    token1 { symbol }
    volumeUSD
  }
}
"#;

const UNISWAP_DAY_DATAS_QUERY: &str = r#"
query uniswapDayDatas($first: Int!) {
  uniswapDayDatas(
    first: $first
    orderBy: date
    orderDirection: asc
  ) {
    id
    date
    volumeUSD
    tvlUSD
    txCount
  }
}
"#;

const POOL_DAY_DATAS_QUERY: &str = r#"
query allDailyPoolData($first: Int!, $date: Int!, $skip: Int!) {
  poolDayDatas(
    first: $first
    skip: $skip
    where: { date: $date }
    orderBy: volumeUSD
    orderDirection: desc
  ) {
    id
    date
    pool {
      id
      token0 { symbol }
      token1 { symbol }
    }
    tvlUSD
    volumeUSD
    txCount
  }
}
"#;

const POOL_SWAPS_QUERY: &str = r#"
query poolPrices($id: String!, $first: Int!, $timestamp_start: Int!) {
  pool(id: $id) {
    swaps(
      first: $first
      orderBy: timestamp
      orderDirection: asc
      where: { timestamp_gte: $timestamp_start }
    ) {
      id
      timestamp
      amount0
      amount1
    }
  }
}
"#;

/// The fixed set of GraphQL documents this crate sends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueryTemplate {
    /// Factory summary (pool count, totals).
    Factory,
    /// Pool listing, paged by `skip`.
    Pools,
    /// Protocol-wide daily summaries, ascending by date.
    UniswapDayDatas,
    /// Per-day pool listing, paged by `skip` and filtered by `date`.
    PoolDayDatas,
    /// Swap history of one pool, paged by a `timestamp_gte` watermark.
    PoolSwaps,
}

impl QueryTemplate {
    pub fn document(self) -> &'static str {
        match self {
            QueryTemplate::Factory => FACTORY_QUERY,
            QueryTemplate::Pools => POOLS_QUERY,
            QueryTemplate::UniswapDayDatas => UNISWAP_DAY_DATAS_QUERY,
            QueryTemplate::PoolDayDatas => POOL_DAY_DATAS_QUERY,
            QueryTemplate::PoolSwaps => POOL_SWAPS_QUERY,
        }
    }

    pub fn operation_name(self) -> &'static str {
        match self {
            QueryTemplate::Factory => "factory",
            QueryTemplate::Pools => "allPools",
            QueryTemplate::UniswapDayDatas => "uniswapDayDatas",
            QueryTemplate::PoolDayDatas => "allDailyPoolData",
            QueryTemplate::PoolSwaps => "poolPrices",
        }
    }

    /// Top-level field of `data` holding the result.
    pub fn root_field(self) -> &'static str {
        match self {
            QueryTemplate::Factory => "factory",
            QueryTemplate::Pools => "pools",
            QueryTemplate::UniswapDayDatas => "uniswapDayDatas",
            QueryTemplate::PoolDayDatas => "poolDayDatas",
            QueryTemplate::PoolSwaps => "pool",
        }
    }

    pub fn declared_variables(self) -> &'static [&'static str] {
        match self {
            QueryTemplate::Factory => &["id"],
            QueryTemplate::Pools => &["first", "skip"],
            QueryTemplate::UniswapDayDatas => &["first"],
            QueryTemplate::PoolDayDatas => &["date", "first", "skip"],
            QueryTemplate::PoolSwaps => &["first", "id", "timestamp_start"],
        }
    }

    /// Rejects variable sets that do not exactly match the declared ones.
    pub fn check(self, variables: &Variables) -> Result<()> {
        let declared: BTreeSet<&str> = self.declared_variables().iter().copied().collect();
        if variables.names() != declared {
            return Err(Error::InvalidConfig {
                field: "variables",
                why: "must match the template's declared variables",
            });
        }
        Ok(())
    }
}

impl fmt::Display for QueryTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.operation_name())
    }
}
