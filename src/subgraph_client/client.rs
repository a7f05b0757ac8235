use std::{sync::Arc, time::Duration};

use time::OffsetDateTime;
use tracing::{debug, info};
use url::Url;

use super::{
    errors::{Error, Result},
    executor::{HttpExecutor, QueryExecutor, QueryResult},
    pagination::{page_count, paginate_offset, paginate_watermark},
    params::{PageSize, Timestamp, Variables},
    queries::QueryTemplate,
};
use crate::{
    analytics::{self, PriceSeries},
    models::{
        take_field, BollingerResult, CumulativeVolume, Factory, FactorySummary, PairVolume,
        PieChartData, Pool, PoolDayData, PoolSwaps, Swap, UniswapDayData,
    },
    timings::time_async_block,
    types::LookbackHours,
};

/// Hosted Uniswap v3 subgraph.
pub const DEFAULT_ENDPOINT: &str =
    "https://api.thegraph.com/subgraphs/name/ianlapham/uniswap-v3-alt";
/// Uniswap v3 factory on Ethereum mainnet.
pub const FACTORY_ADDRESS: &str = "0x1F98431c8aD98523631AE4a59f267346ea31F984";
/// Upper bound on watermark pages fetched by one call.
pub const DEFAULT_MAX_PAGES: usize = 10_000;
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration options for [`SubgraphClient`].
#[derive(Debug, Clone)]
pub struct SubgraphClientOptions {
    factory_address: String,
    page_size: PageSize,
    max_pages: usize,
    request_timeout: Duration,
}

impl Default for SubgraphClientOptions {
    fn default() -> Self {
        Self {
            factory_address: FACTORY_ADDRESS.to_string(),
            page_size: PageSize::default(),
            max_pages: DEFAULT_MAX_PAGES,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl SubgraphClientOptions {
    pub fn with_factory_address(mut self, address: impl Into<String>) -> Self {
        self.factory_address = address.into();
        self
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn factory_address(&self) -> &str {
        &self.factory_address
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn max_pages(&self) -> usize {
        self.max_pages
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    fn validate(&self) -> Result<()> {
        if self.max_pages == 0 {
            return Err(Error::InvalidConfig {
                field: "max_pages",
                why: "must be at least 1",
            });
        }
        if self.factory_address.trim().is_empty() {
            return Err(Error::InvalidConfig {
                field: "factory_address",
                why: "cannot be empty",
            });
        }
        Ok(())
    }
}

/// Read-only client for the Uniswap v3 subgraph.
///
/// Every operation owns its page accumulator for the duration of the call,
/// so one client can serve concurrent callers.
pub struct SubgraphClient {
    executor: Arc<dyn QueryExecutor>,
    opts: SubgraphClientOptions,
}

impl SubgraphClient {
    /// Create a new builder used to configure a [`SubgraphClient`].
    pub fn builder() -> SubgraphClientBuilder {
        SubgraphClientBuilder {
            endpoint: None,
            options: SubgraphClientOptions::default(),
        }
    }

    /// Client for `endpoint` with default options.
    pub fn new(endpoint: &str) -> Result<Self> {
        Self::new_with_options(endpoint, SubgraphClientOptions::default())
    }

    pub fn new_with_options(endpoint: &str, options: SubgraphClientOptions) -> Result<Self> {
        options.validate()?;
        let endpoint = Url::parse(endpoint).map_err(|_| Error::InvalidConfig {
            field: "endpoint",
            why: "must be an absolute URL",
        })?;
        let executor = HttpExecutor::new(endpoint, options.request_timeout)?;
        Ok(Self {
            executor: Arc::new(executor),
            opts: options,
        })
    }

    /// Client over a custom transport.
    pub fn with_executor(
        executor: Arc<dyn QueryExecutor>,
        options: SubgraphClientOptions,
    ) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            executor,
            opts: options,
        })
    }

    pub fn options(&self) -> &SubgraphClientOptions {
        &self.opts
    }

    /// Factory totals.
    pub fn factory(&self) -> FactoryHandle<'_> {
        FactoryHandle { c: self }
    }

    /// Pool listing and pool volume breakdowns.
    pub fn pools(&self) -> PoolsHandle<'_> {
        PoolsHandle { c: self }
    }

    /// Daily protocol and per-pool summaries.
    pub fn days(&self) -> DaysHandle<'_> {
        DaysHandle { c: self }
    }

    /// Swap history and price bands for a single pool.
    pub fn swaps(&self) -> SwapsHandle<'_> {
        SwapsHandle { c: self }
    }

    /// Runs one query template after checking its variables.
    pub async fn query(
        &self,
        template: QueryTemplate,
        variables: Variables,
    ) -> Result<QueryResult> {
        template.check(&variables)?;
        debug!(%template, variables = %variables.as_value(), "subgraph query");
        time_async_block(
            template.operation_name(),
            self.executor.execute(template, &variables),
        )
        .await
    }
}

/// Helpers for the factory entity.
pub struct FactoryHandle<'a> {
    c: &'a SubgraphClient,
}

impl<'a> FactoryHandle<'a> {
    pub async fn get(&self) -> Result<Factory> {
        let variables = Variables::new().id(self.c.opts.factory_address());
        let mut data = self.c.query(QueryTemplate::Factory, variables).await?;
        take_field(&mut data, QueryTemplate::Factory.root_field())
    }

    pub async fn summary(&self) -> Result<FactorySummary> {
        Ok(analytics::factory_summary(&self.get().await?))
    }

    pub async fn pool_count(&self) -> Result<u64> {
        Ok(self.get().await?.pool_count)
    }
}

/// Helpers for the pool listing.
pub struct PoolsHandle<'a> {
    c: &'a SubgraphClient,
}

impl<'a> PoolsHandle<'a> {
    /// Every pool, ordered by descending volume.
    pub async fn all(&self) -> Result<Vec<Pool>> {
        let pool_count = self.c.factory().pool_count().await?;
        let page_size = self.c.opts.page_size();
        let pages = page_count(pool_count, page_size);

        let pools = paginate_offset(page_size, pages, |skip| self.page(skip)).await?;
        info!(pool_count, pages, received = pools.len(), "fetched pool listing");
        Ok(pools)
    }

    pub async fn volume_pie_chart(&self) -> Result<PieChartData> {
        Ok(analytics::volume_pie_chart(&self.all().await?))
    }

    async fn page(&self, skip: u64) -> Result<Vec<Pool>> {
        let variables = Variables::new().first(self.c.opts.page_size()).skip(skip);
        let mut data = self.c.query(QueryTemplate::Pools, variables).await?;
        take_field(&mut data, QueryTemplate::Pools.root_field())
    }
}

/// Helpers for daily summaries.
pub struct DaysHandle<'a> {
    c: &'a SubgraphClient,
}

impl<'a> DaysHandle<'a> {
    /// Protocol-wide daily summaries, ascending by date.
    ///
    /// This listing is a single request at the subgraph's `first` maximum,
    /// independent of the configured offset page size.
    pub async fn protocol(&self) -> Result<Vec<UniswapDayData>> {
        let variables = Variables::new().first(PageSize::default());
        let mut data = self.c.query(QueryTemplate::UniswapDayDatas, variables).await?;
        take_field(&mut data, QueryTemplate::UniswapDayDatas.root_field())
    }

    /// Pool day summaries for every day returned by [`Self::protocol`].
    ///
    /// Each day is walked with offset pages sized from the factory pool
    /// count; the walk for a day ends at its first short page.
    pub async fn pools(&self) -> Result<Vec<PoolDayData>> {
        let days = self.protocol().await?;
        let pool_count = self.c.factory().pool_count().await?;
        let page_size = self.c.opts.page_size();
        let pages = page_count(pool_count, page_size);

        let mut pool_days = Vec::new();
        for day in &days {
            let batch = paginate_offset(page_size, pages, |skip| self.pool_page(day.date, skip))
                .await?;
            debug!(date = day.date, received = batch.len(), "fetched pool days");
            pool_days.extend(batch);
        }
        info!(
            days = days.len(),
            received = pool_days.len(),
            "fetched daily pool listing"
        );
        Ok(pool_days)
    }

    pub async fn volume_by_pair(&self) -> Result<Vec<PairVolume>> {
        analytics::filter_and_label(&self.pools().await?)
    }

    pub async fn cumulative_volume(&self) -> Result<Vec<CumulativeVolume>> {
        analytics::cumulative_volume(&self.protocol().await?)
    }

    async fn pool_page(&self, date: i64, skip: u64) -> Result<Vec<PoolDayData>> {
        let variables = Variables::new()
            .first(self.c.opts.page_size())
            .date(date)
            .skip(skip);
        let mut data = self.c.query(QueryTemplate::PoolDayDatas, variables).await?;
        take_field(&mut data, QueryTemplate::PoolDayDatas.root_field())
    }
}

/// Helpers for a pool's swap history.
pub struct SwapsHandle<'a> {
    c: &'a SubgraphClient,
}

impl<'a> SwapsHandle<'a> {
    /// All swaps of `pool` at or after `since`, deduplicated and ordered.
    pub async fn history(&self, pool: &str, since: Timestamp) -> Result<PriceSeries> {
        let swaps = paginate_watermark(
            since.into_unix(),
            self.c.opts.page_size(),
            self.c.opts.max_pages(),
            |bound| self.page(pool, bound),
        )
        .await?;
        let fetched = swaps.len();
        let series = PriceSeries::from_swaps(swaps)?;
        info!(pool, fetched, unique = series.len(), "fetched swap history");
        Ok(series)
    }

    /// Bollinger band over the last `hours` of swaps.
    pub async fn bollinger_bands(
        &self,
        pool: &str,
        hours: LookbackHours,
    ) -> Result<BollingerResult> {
        self.bollinger_bands_at(pool, hours, OffsetDateTime::now_utc())
            .await
    }

    /// Same as [`Self::bollinger_bands`] with an explicit clock.
    pub async fn bollinger_bands_at(
        &self,
        pool: &str,
        hours: LookbackHours,
        now: OffsetDateTime,
    ) -> Result<BollingerResult> {
        let since = Timestamp::new(hours.start_before(now))?;
        let series = self.history(pool, since).await?;
        analytics::bollinger_bands(pool, hours, &series)
    }

    async fn page(&self, pool: &str, bound: i64) -> Result<Vec<Swap>> {
        let variables = Variables::new()
            .id(pool)
            .first(self.c.opts.page_size())
            .timestamp_start(bound);
        let mut data = self.c.query(QueryTemplate::PoolSwaps, variables).await?;
        let pool: PoolSwaps = take_field(&mut data, QueryTemplate::PoolSwaps.root_field())?;
        Ok(pool.swaps)
    }
}

/// Builder for [`SubgraphClient`].
pub struct SubgraphClientBuilder {
    endpoint: Option<String>,
    options: SubgraphClientOptions,
}

impl SubgraphClientBuilder {
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = Some(url.into());
        self
    }

    pub fn factory_address(mut self, address: impl Into<String>) -> Self {
        self.options = self.options.with_factory_address(address);
        self
    }

    pub fn page_size(mut self, page_size: PageSize) -> Self {
        self.options = self.options.with_page_size(page_size);
        self
    }

    pub fn max_pages(mut self, max_pages: usize) -> Self {
        self.options = self.options.with_max_pages(max_pages);
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.options = self.options.with_request_timeout(timeout);
        self
    }

    pub fn build(self) -> Result<SubgraphClient> {
        let endpoint = self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT);
        SubgraphClient::new_with_options(endpoint, self.options)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::subgraph_client::{testing::ScriptedExecutor, ErrorKind, MAX_PAGE_SIZE};

    const MIDNIGHT: i64 = 1_620_000_000;

    fn factory_payload(pool_count: u64) -> Value {
        json!({
            "factory": {
                "id": FACTORY_ADDRESS,
                "poolCount": pool_count.to_string(),
                "txCount": "100",
                "totalVolumeUSD": "1000.5",
                "totalValueLockedUSD": "250.25"
            }
        })
    }

    fn pool_json(n: usize) -> Value {
        json!({
            "id": format!("0xpool{n}"),
            "token0": { "symbol": format!("T{n}") },
            "token1": { "symbol": "WETH" },
            "volumeUSD": format!("{}", 1000 - n),
        })
    }

    fn pool_day_json(date: i64, n: usize, volume: &str) -> Value {
        json!({
            "id": format!("0xpool{n}-{}", date / 86_400),
            "date": date,
            "pool": {
                "id": format!("0xpool{n}"),
                "token0": { "symbol": format!("T{n}") },
                "token1": { "symbol": "WETH" }
            },
            "tvlUSD": "1",
            "volumeUSD": volume,
            "txCount": "1"
        })
    }

    fn var_u64(vars: &Variables, name: &str) -> u64 {
        vars.get(name).and_then(Value::as_u64).unwrap()
    }

    fn var_i64(vars: &Variables, name: &str) -> i64 {
        vars.get(name).and_then(Value::as_i64).unwrap()
    }

    fn page_of(source: &[Value], vars: &Variables) -> Vec<Value> {
        let skip = var_u64(vars, "skip") as usize;
        let first = var_u64(vars, "first") as usize;
        source.iter().skip(skip).take(first).cloned().collect()
    }

    fn client_over(executor: &Arc<ScriptedExecutor>, page_size: u32) -> SubgraphClient {
        let options = SubgraphClientOptions::default()
            .with_page_size(PageSize::new(page_size).unwrap())
            .with_max_pages(50);
        SubgraphClient::with_executor(executor.clone(), options).unwrap()
    }

    #[tokio::test]
    async fn pools_walk_precomputed_offset_pages() {
        let pools: Vec<Value> = (0..5).map(pool_json).collect();
        let executor = Arc::new(ScriptedExecutor::new(move |template, vars| match template {
            QueryTemplate::Factory => Ok(factory_payload(5)),
            QueryTemplate::Pools => Ok(json!({ "pools": page_of(&pools, vars) })),
            other => panic!("unexpected {other}"),
        }));
        let client = client_over(&executor, 2);

        let listed = client.pools().all().await.unwrap();

        assert_eq!(listed.len(), 5);
        assert_eq!(listed[0].id, "0xpool0");
        assert_eq!(listed[4].volume_usd, 996.0);
        assert_eq!(executor.count(QueryTemplate::Pools), 3);
        let skips: Vec<u64> = executor
            .calls_for(QueryTemplate::Pools)
            .iter()
            .map(|vars| var_u64(vars, "skip"))
            .collect();
        assert_eq!(skips, vec![0, 2, 4]);
    }

    #[tokio::test]
    async fn pools_stop_on_short_page_when_count_overstates() {
        let pools: Vec<Value> = (0..3).map(pool_json).collect();
        let executor = Arc::new(ScriptedExecutor::new(move |template, vars| match template {
            QueryTemplate::Factory => Ok(factory_payload(40)),
            QueryTemplate::Pools => Ok(json!({ "pools": page_of(&pools, vars) })),
            other => panic!("unexpected {other}"),
        }));
        let client = client_over(&executor, 2);

        let listed = client.pools().all().await.unwrap();
        assert_eq!(listed.len(), 3);
        assert_eq!(executor.count(QueryTemplate::Pools), 2);
    }

    #[tokio::test]
    async fn pie_chart_labels_pairs() {
        let pools: Vec<Value> = (0..2).map(pool_json).collect();
        let executor = Arc::new(ScriptedExecutor::new(move |template, vars| match template {
            QueryTemplate::Factory => Ok(factory_payload(2)),
            QueryTemplate::Pools => Ok(json!({ "pools": page_of(&pools, vars) })),
            other => panic!("unexpected {other}"),
        }));
        let client = client_over(&executor, 1000);

        let chart = client.pools().volume_pie_chart().await.unwrap();
        assert_eq!(chart.labels, vec!["T0-WETH", "T1-WETH"]);
        assert_eq!(chart.datasets[0].data, vec![1000.0, 999.0]);
    }

    #[tokio::test]
    async fn daily_pool_listing_walks_each_day() {
        let days = vec![MIDNIGHT, MIDNIGHT + 86_400];
        let day_rows: Vec<Value> = days
            .iter()
            .map(|date| {
                json!({
                    "id": (date / 86_400).to_string(),
                    "date": date,
                    "volumeUSD": "10",
                    "tvlUSD": "5",
                    "txCount": "2"
                })
            })
            .collect();
        let executor = Arc::new(ScriptedExecutor::new(move |template, vars| match template {
            QueryTemplate::Factory => Ok(factory_payload(3)),
            QueryTemplate::UniswapDayDatas => Ok(json!({ "uniswapDayDatas": day_rows })),
            QueryTemplate::PoolDayDatas => {
                let date = var_i64(vars, "date");
                let rows = vec![
                    pool_day_json(date, 0, "12.5"),
                    pool_day_json(date, 1, "0"),
                    pool_day_json(date, 2, "0.0001"),
                ];
                Ok(json!({ "poolDayDatas": page_of(&rows, vars) }))
            }
            other => panic!("unexpected {other}"),
        }));
        let client = client_over(&executor, 2);

        let pool_days = client.days().pools().await.unwrap();
        assert_eq!(pool_days.len(), 6);
        assert_eq!(executor.count(QueryTemplate::PoolDayDatas), 4);

        let by_pair = client.days().volume_by_pair().await.unwrap();
        assert_eq!(by_pair.len(), 4);
        assert!(by_pair.iter().all(|row| row.volume_usd != 0.0));
        assert_eq!(by_pair[0].pair, "T0-WETH");
        assert_eq!(by_pair[0].date, "2021-05-03T00:00:00");
        assert_eq!(by_pair[3].date, "2021-05-04T00:00:00");
    }

    #[tokio::test]
    async fn cumulative_volume_from_daily_summaries() {
        let volumes = ["10", "5", "25", "0", "60"];
        let day_rows: Vec<Value> = volumes
            .iter()
            .enumerate()
            .map(|(n, volume)| {
                let date = MIDNIGHT + n as i64 * 86_400;
                json!({
                    "id": (date / 86_400).to_string(),
                    "date": date,
                    "volumeUSD": volume,
                    "tvlUSD": "0",
                    "txCount": "1"
                })
            })
            .collect();
        let executor = Arc::new(ScriptedExecutor::new(move |template, vars| match template {
            QueryTemplate::UniswapDayDatas => {
                let first = var_u64(vars, "first") as usize;
                let rows: Vec<Value> = day_rows.iter().take(first).cloned().collect();
                Ok(json!({ "uniswapDayDatas": rows }))
            }
            other => panic!("unexpected {other}"),
        }));
        // Offset page size smaller than the number of days.
        let client = client_over(&executor, 2);

        let cumulative = client.days().cumulative_volume().await.unwrap();
        let totals: Vec<f64> = cumulative.iter().map(|c| c.cumulative_volume_usd).collect();
        assert_eq!(totals, vec![10.0, 15.0, 40.0, 40.0, 100.0]);
        assert_eq!(cumulative[4].date, "2021-05-07T00:00:00");

        let sent = executor.calls_for(QueryTemplate::UniswapDayDatas);
        assert_eq!(sent.len(), 1);
        assert_eq!(var_u64(&sent[0], "first"), u64::from(MAX_PAGE_SIZE));
    }

    #[tokio::test]
    async fn factory_summary_passes_totals_through() {
        let executor = Arc::new(ScriptedExecutor::new(|template, vars| {
            assert_eq!(template, QueryTemplate::Factory);
            assert_eq!(vars.get("id"), Some(&json!(FACTORY_ADDRESS)));
            Ok(factory_payload(7))
        }));
        let client = client_over(&executor, 1000);

        let summary = client.factory().summary().await.unwrap();
        assert_eq!(summary.tx_count, 100);
        assert_eq!(summary.total_volume_usd, 1000.5);
        assert_eq!(summary.total_value_locked_usd, 250.25);
    }

    fn swap_json(n: usize, timestamp: i64, price: f64) -> Value {
        json!({
            "id": format!("0xtx{n}#0"),
            "timestamp": timestamp.to_string(),
            "amount0": "-1",
            "amount1": format!("{price}"),
        })
    }

    #[tokio::test]
    async fn bollinger_bands_walk_the_swap_watermark() {
        let now = OffsetDateTime::from_unix_timestamp(MIDNIGHT + 20 * 3600).unwrap();
        // 20h window -> 1h buckets starting at MIDNIGHT.
        let swaps: Vec<(i64, f64)> = vec![
            (MIDNIGHT + 60, 1.0),
            (MIDNIGHT + 120, 2.0),
            (MIDNIGHT + 3600 + 60, 3.0),
            (MIDNIGHT + 3600 + 120, 4.0),
            (MIDNIGHT + 2 * 3600, 6.0),
        ];
        let rows: Vec<(i64, Value)> = swaps
            .iter()
            .enumerate()
            .map(|(n, (ts, price))| (*ts, swap_json(n, *ts, *price)))
            .collect();
        let executor = Arc::new(ScriptedExecutor::new(move |template, vars| {
            assert_eq!(template, QueryTemplate::PoolSwaps);
            let bound = var_i64(vars, "timestamp_start");
            let first = var_u64(vars, "first") as usize;
            let page: Vec<Value> = rows
                .iter()
                .filter(|(ts, _)| *ts >= bound)
                .take(first)
                .map(|(_, row)| row.clone())
                .collect();
            Ok(json!({ "pool": { "swaps": page } }))
        }));
        let client = client_over(&executor, 2);
        let hours = LookbackHours::from_u32(20).unwrap();

        let result = client
            .swaps()
            .bollinger_bands_at("0xpool", hours, now)
            .await
            .unwrap();

        let bounds: Vec<i64> = executor
            .calls_for(QueryTemplate::PoolSwaps)
            .iter()
            .map(|vars| var_i64(vars, "timestamp_start"))
            .collect();
        assert_eq!(bounds[0], MIDNIGHT);
        assert!(bounds.windows(2).all(|w| w[0] < w[1]));

        // closes 2, 4, 6
        assert!((result.mid - 4.0).abs() < 1e-9);
        assert!((result.upper - 8.0).abs() < 1e-9);
        assert!((result.lower - 0.0).abs() < 1e-9);
        assert_eq!(result.latest, 6.0);
        assert_eq!(result.dt_latest, "2021-05-03T02:00:00");
    }

    #[tokio::test]
    async fn unknown_pool_is_a_schema_mismatch() {
        let executor = Arc::new(ScriptedExecutor::new(|_, _| Ok(json!({ "pool": null }))));
        let client = client_over(&executor, 1000);
        let since = Timestamp::new(MIDNIGHT).unwrap();

        let err = client.swaps().history("0xmissing", since).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SchemaMismatch);
    }

    #[tokio::test]
    async fn transport_failures_abort_the_operation() {
        let executor = Arc::new(ScriptedExecutor::new(|_, _| {
            Err(Error::Http {
                status: 502,
                body: "bad gateway".into(),
            })
        }));
        let client = client_over(&executor, 1000);

        let err = client.pools().all().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TransportFailure);
        assert_eq!(executor.count(QueryTemplate::Pools), 0);
    }

    #[tokio::test]
    async fn mismatched_variables_never_reach_the_executor() {
        let executor = Arc::new(ScriptedExecutor::new(|_, _| Ok(json!({}))));
        let client = client_over(&executor, 1000);

        let err = client
            .query(QueryTemplate::Pools, Variables::new().skip(0))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
        assert_eq!(executor.total(), 0);
    }

    #[test]
    fn builder_validates_inputs() {
        assert!(SubgraphClient::builder().endpoint("not a url").build().is_err());
        assert!(SubgraphClient::builder().max_pages(0).build().is_err());
        let client = SubgraphClient::builder()
            .endpoint("http://localhost:8000/subgraphs/name/uniswap-v3")
            .page_size(PageSize::new(500).unwrap())
            .build()
            .unwrap();
        assert_eq!(client.options().page_size().get(), 500);
        assert_eq!(client.options().factory_address(), FACTORY_ADDRESS);
    }
}
