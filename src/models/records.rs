use serde::Serialize;

/// Current protocol totals.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorySummary {
    #[serde(rename = "totalValueLockedUSD")]
    pub total_value_locked_usd: f64,
    #[serde(rename = "totalVolumeUSD")]
    pub total_volume_usd: f64,
    pub tx_count: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PieDataset {
    pub data: Vec<f64>,
}

/// Pool volumes shaped for a pie chart: one dataset, one label per slice.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PieChartData {
    pub datasets: Vec<PieDataset>,
    pub labels: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PairVolume {
    pub pair: String,
    pub date: String,
    #[serde(rename = "volumeUSD")]
    pub volume_usd: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CumulativeVolume {
    pub date: String,
    #[serde(rename = "cumulativeVolumeUSD")]
    pub cumulative_volume_usd: f64,
}

/// Bollinger band over bucketed closing prices of a pool.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BollingerResult {
    pub pool: String,
    pub period_hours: u32,
    pub interval_hours: f64,
    pub dt_latest: String,
    pub latest: f64,
    pub mid: f64,
    pub upper: f64,
    pub lower: f64,
}
