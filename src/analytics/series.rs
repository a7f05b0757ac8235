use std::collections::HashSet;

use serde::Serialize;

use crate::{
    models::Swap,
    subgraph_client::{Error, Result},
};

/// A swap with its derived price of token0 in units of token1.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PricePoint {
    pub id: String,
    pub timestamp: i64,
    pub amount0: f64,
    pub amount1: f64,
    #[serde(rename = "priceInToken1")]
    pub price: f64,
}

/// `|amount1 / amount0|`. A zero `amount0` has no defined price.
pub fn price_in_token1(swap: &Swap) -> Result<f64> {
    if swap.amount0 == 0.0 {
        return Err(Error::precondition(format!(
            "swap {} has zero amount0",
            swap.id
        )));
    }
    Ok((swap.amount1 / swap.amount0).abs())
}

/// Swaps deduplicated by id and ordered by timestamp.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Keeps the first occurrence of each id, then stable-sorts by timestamp.
    pub fn from_swaps(swaps: impl IntoIterator<Item = Swap>) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut points = Vec::new();
        for swap in swaps {
            if !seen.insert(swap.id.clone()) {
                continue;
            }
            let price = price_in_token1(&swap)?;
            points.push(PricePoint {
                id: swap.id,
                timestamp: swap.timestamp,
                amount0: swap.amount0,
                amount1: swap.amount1,
                price,
            });
        }
        points.sort_by_key(|point| point.timestamp);
        Ok(Self { points })
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn into_points(self) -> Vec<PricePoint> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn latest(&self) -> Option<&PricePoint> {
        self.points.last()
    }
}
