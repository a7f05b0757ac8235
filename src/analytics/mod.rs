mod aggregate;
mod bollinger;
mod resample;
mod series;

pub use aggregate::{cumulative_volume, factory_summary, filter_and_label, volume_pie_chart};
pub use bollinger::{bollinger_bands, Bands, BAND_STDDEVS};
pub use resample::{closing_prices, BucketClose};
pub use series::{price_in_token1, PricePoint, PriceSeries};
