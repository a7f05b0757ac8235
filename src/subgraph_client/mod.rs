mod client;
mod errors;
mod executor;
mod pagination;
mod params;
mod queries;

pub use client::{
    DaysHandle, FactoryHandle, PoolsHandle, SubgraphClient, SubgraphClientBuilder,
    SubgraphClientOptions, SwapsHandle, DEFAULT_ENDPOINT, DEFAULT_MAX_PAGES,
    DEFAULT_REQUEST_TIMEOUT, FACTORY_ADDRESS,
};
pub use errors::{Error, ErrorKind, Result};
pub use executor::{HttpExecutor, QueryExecutor, QueryResult};
pub use params::{PageSize, Timestamp, Variables, MAX_PAGE_SIZE};
pub use queries::QueryTemplate;
