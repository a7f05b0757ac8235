use statrs::statistics::Statistics;

use super::{resample::closing_prices, series::PriceSeries};
use crate::{
    models::BollingerResult,
    subgraph_client::{Error, Result},
    types::{timestamp_to_date, LookbackHours},
};

/// Band half-width in sample standard deviations.
pub const BAND_STDDEVS: f64 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bands {
    pub mid: f64,
    pub upper: f64,
    pub lower: f64,
}

impl Bands {
    /// Mean ± two sample standard deviations of `closes`.
    ///
    /// Needs at least two closes; a single close has no sample deviation.
    pub fn from_closes(closes: &[f64]) -> Result<Self> {
        if closes.len() < 2 {
            return Err(Error::precondition(format!(
                "need at least 2 closing prices for a standard deviation, got {}",
                closes.len()
            )));
        }
        let mid = closes.iter().mean();
        let spread = BAND_STDDEVS * closes.iter().std_dev();
        Ok(Self {
            mid,
            upper: mid + spread,
            lower: mid - spread,
        })
    }
}

/// Bollinger band of `series` resampled into `hours / 20` hour buckets.
///
/// The reported latest price is the last raw observation, whichever bucket
/// it fell into.
pub fn bollinger_bands(
    pool: &str,
    hours: LookbackHours,
    series: &PriceSeries,
) -> Result<BollingerResult> {
    let latest = series.latest().ok_or_else(|| {
        Error::precondition(format!("no swaps for pool {pool} in the last {hours}"))
    })?;

    let closes: Vec<f64> = closing_prices(series.points(), hours.bucket_width_seconds())?
        .into_iter()
        .map(|bucket| bucket.close)
        .collect();
    let bands = Bands::from_closes(&closes)?;

    Ok(BollingerResult {
        pool: pool.to_string(),
        period_hours: hours.get(),
        interval_hours: hours.interval_hours(),
        dt_latest: timestamp_to_date(latest.timestamp)?,
        latest: latest.price,
        mid: bands.mid,
        upper: bands.upper,
        lower: bands.lower,
    })
}
