use super::series::PricePoint;
use crate::subgraph_client::{Error, Result};

const SECONDS_PER_DAY: i64 = 86_400;

/// Last observed price inside one fixed-width bucket.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BucketClose {
    pub bucket_start: i64,
    pub close: f64,
}

/// Buckets observations into `width_seconds` intervals and keeps the last
/// price of each.
///
/// Buckets are anchored at UTC midnight of the first observation's day.
/// Buckets without observations do not appear in the output.
pub fn closing_prices(points: &[PricePoint], width_seconds: i64) -> Result<Vec<BucketClose>> {
    if width_seconds <= 0 {
        return Err(Error::InvalidConfig {
            field: "bucket_width",
            why: "must be positive",
        });
    }

    let mut ordered: Vec<&PricePoint> = points.iter().collect();
    ordered.sort_by_key(|point| point.timestamp);

    let Some(first) = ordered.first() else {
        return Ok(Vec::new());
    };
    let origin = first.timestamp - first.timestamp.rem_euclid(SECONDS_PER_DAY);

    let mut closes: Vec<BucketClose> = Vec::new();
    for point in ordered {
        let index = (point.timestamp - origin).div_euclid(width_seconds);
        let bucket_start = origin + index * width_seconds;
        match closes.last_mut() {
            Some(last) if last.bucket_start == bucket_start => last.close = point.price,
            _ => closes.push(BucketClose {
                bucket_start,
                close: point.price,
            }),
        }
    }
    Ok(closes)
}
