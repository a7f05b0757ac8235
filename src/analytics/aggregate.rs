use tracing::debug;

use crate::{
    models::{
        CumulativeVolume, Factory, FactorySummary, PairVolume, PieChartData, PieDataset, Pool,
        PoolDayData, UniswapDayData,
    },
    subgraph_client::Result,
    types::timestamp_to_date,
};

pub fn factory_summary(factory: &Factory) -> FactorySummary {
    FactorySummary {
        total_value_locked_usd: factory.total_value_locked_usd,
        total_volume_usd: factory.total_volume_usd,
        tx_count: factory.tx_count,
    }
}

/// One slice per pool, in input order.
pub fn volume_pie_chart(pools: &[Pool]) -> PieChartData {
    let (data, labels) = pools.iter().map(|pool| (pool.volume_usd, pool.pair())).unzip();
    PieChartData {
        datasets: vec![PieDataset { data }],
        labels,
    }
}

/// Drops zero-volume pool days and labels the rest with their pair and date.
pub fn filter_and_label(days: &[PoolDayData]) -> Result<Vec<PairVolume>> {
    days.iter()
        .filter(|day| day.volume_usd != 0.0)
        .map(|day| {
            Ok(PairVolume {
                pair: day.pool.pair(),
                date: timestamp_to_date(day.date)?,
                volume_usd: day.volume_usd,
            })
        })
        .collect()
}

/// Running total of daily volume, ordered by date.
///
/// Input is stably sorted by date first, so a caller passing unordered days
/// still gets a monotone series.
pub fn cumulative_volume(days: &[UniswapDayData]) -> Result<Vec<CumulativeVolume>> {
    let mut ordered: Vec<&UniswapDayData> = days.iter().collect();
    if !ordered.windows(2).all(|w| w[0].date <= w[1].date) {
        debug!(days = days.len(), "daily summaries out of order; sorting by date");
        ordered.sort_by_key(|day| day.date);
    }

    let mut running = 0.0;
    ordered
        .into_iter()
        .map(|day| {
            running += day.volume_usd;
            Ok(CumulativeVolume {
                date: timestamp_to_date(day.date)?,
                cumulative_volume_usd: running,
            })
        })
        .collect()
}
