//! Market data facade: symbol normalization, provider clients and the
//! quote cache that fronts them.

pub mod providers;
pub mod service;

pub use providers::{MarketDataProviderTrait, YahooProvider};
pub use service::{normalize_symbol, MarketDataService};
