//! Wire types decoded from subgraph responses and the plain records
//! produced for presentation.

mod records;
mod subgraph;

pub use records::{
    BollingerResult, CumulativeVolume, FactorySummary, PairVolume, PieChartData, PieDataset,
};
pub use subgraph::{Factory, Pool, PoolDayData, PoolRef, Swap, Token, UniswapDayData};
pub(crate) use subgraph::PoolSwaps;

use serde::{de, de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

use crate::subgraph_client::{Error, Result};

/// Moves `data[field]` out of a query result and decodes it.
pub(crate) fn take_field<T: DeserializeOwned>(data: &mut Value, field: &str) -> Result<T> {
    let value = data
        .get_mut(field)
        .map(Value::take)
        .filter(|value| !value.is_null())
        .ok_or_else(|| Error::schema(field, "missing from payload"))?;
    serde_json::from_value(value).map_err(|err| Error::schema(field, err))
}

// The subgraph serializes BigInt/BigDecimal as strings and Int as numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(serde_json::Number),
    Text(String),
}

pub(crate) fn f64_from_text<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => n
            .as_f64()
            .ok_or_else(|| de::Error::custom("number out of f64 range")),
        NumberOrText::Text(s) => s.trim().parse::<f64>().map_err(de::Error::custom),
    }
}

pub(crate) fn i64_from_text<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => n
            .as_i64()
            .ok_or_else(|| de::Error::custom("expected an integer")),
        NumberOrText::Text(s) => s.trim().parse::<i64>().map_err(de::Error::custom),
    }
}

pub(crate) fn u64_from_text<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => n
            .as_u64()
            .ok_or_else(|| de::Error::custom("expected a non-negative integer")),
        NumberOrText::Text(s) => s.trim().parse::<u64>().map_err(de::Error::custom),
    }
}
