//! Quote fetching with symbol normalization and a TTL cache in front of
//! the provider.

use moka::future::Cache;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use std::time::Duration;

use crate::errors::{MarketDataError, Result};
use crate::market_data::providers::MarketDataProviderTrait;

const CACHE_CAPACITY: u64 = 10_000;

/// Exchange suffixes the provider already understands.
const KNOWN_SUFFIXES: [&str; 2] = [".NS", ".BO"];

/// Bare symbols default to the NSE listing.
pub fn normalize_symbol(symbol: &str) -> String {
    let trimmed = symbol.trim().to_uppercase();
    if KNOWN_SUFFIXES.iter().any(|s| trimmed.ends_with(s)) {
        trimmed
    } else {
        format!("{}.NS", trimmed)
    }
}

pub struct MarketDataService<P: MarketDataProviderTrait> {
    provider: P,
    cache: Cache<String, Decimal>,
}

impl<P: MarketDataProviderTrait> MarketDataService<P> {
    pub fn new(provider: P, cache_ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(CACHE_CAPACITY)
            .time_to_live(cache_ttl)
            .build();
        MarketDataService { provider, cache }
    }

    /// Latest price for a symbol, served from cache within the TTL.
    /// Failures are never cached.
    pub async fn fetch_price(&self, symbol: &str) -> Result<Decimal> {
        let normalized = normalize_symbol(symbol);

        if let Some(price) = self.cache.get(&normalized).await {
            return Ok(price);
        }

        let price = self.provider.fetch_price(&normalized).await?;
        self.cache.insert(normalized, price).await;
        Ok(price)
    }

    /// `fetch_price`, converted for callers that store plain floats.
    pub async fn fetch_price_f64(&self, symbol: &str) -> Result<f64> {
        let price = self.fetch_price(symbol).await?;
        price
            .to_f64()
            .ok_or_else(|| MarketDataError::NoData(symbol.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_symbol_gets_nse_suffix() {
        assert_eq!(normalize_symbol("RELIANCE"), "RELIANCE.NS");
    }

    #[test]
    fn existing_suffix_is_kept() {
        assert_eq!(normalize_symbol("RELIANCE.NS"), "RELIANCE.NS");
        assert_eq!(normalize_symbol("TATASTEEL.BO"), "TATASTEEL.BO");
    }

    #[test]
    fn symbol_is_trimmed_and_uppercased() {
        assert_eq!(normalize_symbol("  infy "), "INFY.NS");
    }
}
