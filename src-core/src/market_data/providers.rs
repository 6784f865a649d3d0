//! Market data providers.

use async_trait::async_trait;
use rust_decimal::Decimal;
use yahoo_finance_api as yahoo;

use crate::errors::MarketDataError;

#[async_trait]
pub trait MarketDataProviderTrait: Send + Sync {
    /// Latest close for an already-normalized symbol.
    async fn fetch_price(&self, symbol: &str) -> Result<Decimal, MarketDataError>;
}

/// Yahoo Finance quote provider.
pub struct YahooProvider {
    connector: yahoo::YahooConnector,
}

impl YahooProvider {
    pub fn new() -> Result<Self, MarketDataError> {
        let connector = yahoo::YahooConnector::new().map_err(|e| MarketDataError::ProviderError {
            symbol: String::new(),
            reason: format!("failed to build Yahoo connector: {}", e),
        })?;
        Ok(YahooProvider { connector })
    }
}

#[async_trait]
impl MarketDataProviderTrait for YahooProvider {
    async fn fetch_price(&self, symbol: &str) -> Result<Decimal, MarketDataError> {
        let response = self
            .connector
            .get_latest_quotes(symbol, "1d")
            .await
            .map_err(|e| MarketDataError::ProviderError {
                symbol: symbol.to_string(),
                reason: e.to_string(),
            })?;

        let quote = response
            .last_quote()
            .map_err(|_| MarketDataError::NoData(symbol.to_string()))?;

        Decimal::from_f64_retain(quote.close)
            .filter(|p| !p.is_sign_negative())
            .ok_or_else(|| MarketDataError::NoData(symbol.to_string()))
    }
}
