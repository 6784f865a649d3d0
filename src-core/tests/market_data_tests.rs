//! Batch price refresh with a scripted provider: one failing symbol must
//! not block the rest.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use rust_decimal::Decimal;

use advisor_core::db;
use advisor_core::errors::MarketDataError;
use advisor_core::holdings::{
    HoldingService, HoldingServiceTrait, NewHolding, SqliteHoldingRepository,
};
use advisor_core::market_data::{MarketDataProviderTrait, MarketDataService};

/// Fails any symbol starting with "BAD", quotes everything else at 100.
struct ScriptedProvider;

#[async_trait]
impl MarketDataProviderTrait for ScriptedProvider {
    async fn fetch_price(&self, symbol: &str) -> Result<Decimal, MarketDataError> {
        if symbol.starts_with("BAD") {
            Err(MarketDataError::ProviderError {
                symbol: symbol.to_string(),
                reason: "scripted failure".to_string(),
            })
        } else {
            Ok(Decimal::new(100, 0))
        }
    }
}

fn new_holding(symbol: &str) -> NewHolding {
    NewHolding {
        name: format!("{} Ltd", symbol),
        symbol: symbol.to_string(),
        holding_type: "stock".to_string(),
        quantity: 10.0,
        avg_price: 90.0,
        current_price: None,
        sector: None,
    }
}

fn test_service() -> (HoldingService<SqliteHoldingRepository>, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let url = dir.path().join("test.db").to_string_lossy().into_owned();
    let pool = Arc::new(db::create_pool(&url).unwrap());
    (
        HoldingService::new(Arc::new(SqliteHoldingRepository::new(pool))),
        dir,
    )
}

#[tokio::test]
async fn failed_symbol_does_not_block_the_batch() {
    let (service, _dir) = test_service();
    let market = MarketDataService::new(ScriptedProvider, Duration::from_secs(60));

    service.create_holding(new_holding("GOODONE")).await.unwrap();
    service.create_holding(new_holding("BADONE")).await.unwrap();
    service.create_holding(new_holding("GOODTWO")).await.unwrap();

    let report = service.refresh_all_prices(&market).await.unwrap();

    assert_eq!(report.total, 3);
    assert_eq!(report.updated.len(), 2);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].symbol, "BADONE");

    // The survivors carry the new price; the failure keeps its stored state.
    for holding in service.get_holdings().unwrap() {
        if holding.symbol == "BADONE" {
            assert_eq!(holding.current_price, None);
        } else {
            assert_eq!(holding.current_price, Some(100.0));
        }
    }
}

#[tokio::test]
async fn single_refresh_surfaces_the_provider_error() {
    let (service, _dir) = test_service();
    let market = MarketDataService::new(ScriptedProvider, Duration::from_secs(60));

    let holding = service.create_holding(new_holding("BADONE")).await.unwrap();
    assert!(service.refresh_price(&holding.id, &market).await.is_err());
    assert_eq!(
        service.get_holding(&holding.id).unwrap().current_price,
        None
    );
}

#[tokio::test]
async fn cached_quote_is_reused_within_ttl() {
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingProvider(Arc<AtomicUsize>);

    #[async_trait]
    impl MarketDataProviderTrait for CountingProvider {
        async fn fetch_price(&self, _symbol: &str) -> Result<Decimal, MarketDataError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(Decimal::new(42, 0))
        }
    }

    let calls = Arc::new(AtomicUsize::new(0));
    let market = MarketDataService::new(CountingProvider(calls.clone()), Duration::from_secs(60));

    market.fetch_price("INFY").await.unwrap();
    market.fetch_price("INFY").await.unwrap();
    market.fetch_price("infy ").await.unwrap();

    // Three lookups of the same normalized symbol, one provider call.
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
