//! Paginated Uniswap v3 subgraph client with volume aggregation and
//! Bollinger bands over swap prices.

pub mod analytics;
pub mod config;
pub mod models;
pub mod subgraph_client;
pub(crate) mod timings;
pub mod types;

pub use config::SubgraphConfig;
pub use subgraph_client::{
    Error as SubgraphError, ErrorKind, HttpExecutor, PageSize, QueryExecutor, QueryTemplate,
    Result as SubgraphResult, SubgraphClient, SubgraphClientBuilder, SubgraphClientOptions,
    Timestamp, Variables,
};
pub use types::LookbackHours;
