use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::ai::AiService;
use crate::errors::{Error, Result};
use crate::holdings::holdings_model::{
    AnalyzeReport, FailedSymbol, Holding, NewHolding, PriceRefreshReport, UpdateHolding,
};
use crate::holdings::holdings_traits::{HoldingRepositoryTrait, HoldingServiceTrait};
use crate::market_data::{MarketDataProviderTrait, MarketDataService};

/// Pause between provider calls in a batch analyze pass.
const ANALYZE_PACING: Duration = Duration::from_secs(1);

pub struct HoldingService<T: HoldingRepositoryTrait> {
    holding_repo: Arc<T>,
}

impl<T: HoldingRepositoryTrait> HoldingService<T> {
    pub fn new(holding_repo: Arc<T>) -> Self {
        HoldingService { holding_repo }
    }

    /// Total market value of the portfolio, pricing unrefreshed holdings
    /// at their purchase average.
    pub fn portfolio_value(&self) -> Result<f64> {
        Ok(self
            .holding_repo
            .load_holdings()?
            .iter()
            .map(Holding::market_value)
            .sum())
    }

    /// Refresh the live price of a single holding. A provider failure here
    /// is an error; the stored price stays untouched.
    pub async fn refresh_price<P: MarketDataProviderTrait>(
        &self,
        holding_id: &str,
        market: &MarketDataService<P>,
    ) -> Result<Holding> {
        let holding = self.holding_repo.get_holding(holding_id)?;
        let price = market.fetch_price_f64(&holding.symbol).await?;
        let updated = self.holding_repo.set_current_price(holding_id, price).await?;
        self.holding_repo.record_price(&holding.symbol, price).await?;
        Ok(updated)
    }

    /// Refresh every holding's price. Failed symbols are collected and the
    /// rest of the batch keeps going.
    pub async fn refresh_all_prices<P: MarketDataProviderTrait>(
        &self,
        market: &MarketDataService<P>,
    ) -> Result<PriceRefreshReport> {
        let holdings = self.holding_repo.load_holdings()?;
        let total = holdings.len();
        let mut updated = Vec::new();
        let mut failed = Vec::new();

        for holding in holdings {
            match market.fetch_price_f64(&holding.symbol).await {
                Ok(price) => {
                    self.holding_repo.set_current_price(&holding.id, price).await?;
                    self.holding_repo.record_price(&holding.symbol, price).await?;
                    updated.push(holding.symbol);
                }
                Err(e) => {
                    log::warn!("price refresh failed for {}: {}", holding.symbol, e);
                    failed.push(FailedSymbol {
                        symbol: holding.symbol,
                        reason: e.to_string(),
                    });
                }
            }
        }

        Ok(PriceRefreshReport {
            updated,
            failed,
            total,
        })
    }

    /// Fetch AI recommendations for one holding and persist them. The price
    /// is refreshed first on a best-effort basis; analysis proceeds on the
    /// stored price when the lookup fails.
    pub async fn analyze_holding<P: MarketDataProviderTrait>(
        &self,
        holding_id: &str,
        market: &MarketDataService<P>,
        ai: &AiService,
    ) -> Result<Holding> {
        let mut holding = self.holding_repo.get_holding(holding_id)?;

        match market.fetch_price_f64(&holding.symbol).await {
            Ok(price) => {
                holding = self.holding_repo.set_current_price(holding_id, price).await?;
            }
            Err(e) => {
                log::warn!(
                    "analyze: price refresh failed for {}, using stored price: {}",
                    holding.symbol,
                    e
                );
            }
        }

        let recommendations = ai.analyze_holding(&holding).await?;
        let json = serde_json::to_string(&recommendations).map_err(|e| {
            Error::Ai(crate::errors::AiError::MalformedResponse {
                provider: "ai",
                reason: e.to_string(),
            })
        })?;

        self.holding_repo.set_recommendations(holding_id, json).await
    }

    /// Analyze every holding, pacing provider calls one second apart.
    /// Per-holding failures are collected, not fatal.
    pub async fn analyze_all<P: MarketDataProviderTrait>(
        &self,
        market: &MarketDataService<P>,
        ai: &AiService,
    ) -> Result<AnalyzeReport> {
        let holdings = self.holding_repo.load_holdings()?;
        let total = holdings.len();
        let mut analyzed = 0;
        let mut failed = Vec::new();

        for (i, holding) in holdings.iter().enumerate() {
            if i > 0 {
                tokio::time::sleep(ANALYZE_PACING).await;
            }
            match self.analyze_holding(&holding.id, market, ai).await {
                Ok(_) => analyzed += 1,
                Err(e) => {
                    log::warn!("analysis failed for {}: {}", holding.symbol, e);
                    failed.push(FailedSymbol {
                        symbol: holding.symbol.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        Ok(AnalyzeReport {
            analyzed,
            total,
            failed,
        })
    }
}

#[async_trait]
impl<T: HoldingRepositoryTrait> HoldingServiceTrait for HoldingService<T> {
    fn get_holdings(&self) -> Result<Vec<Holding>> {
        self.holding_repo.load_holdings()
    }

    fn get_holding(&self, holding_id: &str) -> Result<Holding> {
        self.holding_repo.get_holding(holding_id)
    }

    async fn create_holding(&self, new_holding: NewHolding) -> Result<Holding> {
        new_holding.validate()?;
        self.holding_repo
            .insert_new_holding(Holding::from_new(new_holding))
            .await
    }

    async fn update_holding(&self, holding_id: &str, update: UpdateHolding) -> Result<Holding> {
        update.validate()?;
        self.holding_repo.update_holding(holding_id, update).await
    }

    async fn delete_holding(&self, holding_id: String) -> Result<usize> {
        self.holding_repo.delete_holding(holding_id).await
    }
}
