//! Holding arithmetic, validation and repository round trips against an
//! on-disk SQLite database.

use std::sync::Arc;

use advisor_core::db;
use advisor_core::holdings::{
    Holding, HoldingService, HoldingServiceTrait, NewHolding, SqliteHoldingRepository,
    UpdateHolding,
};

fn new_holding(name: &str, symbol: &str, quantity: f64, avg_price: f64) -> NewHolding {
    NewHolding {
        name: name.to_string(),
        symbol: symbol.to_string(),
        holding_type: "stock".to_string(),
        quantity,
        avg_price,
        current_price: None,
        sector: None,
    }
}

fn test_service() -> (HoldingService<SqliteHoldingRepository>, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let url = dir.path().join("test.db").to_string_lossy().into_owned();
    let pool = Arc::new(db::create_pool(&url).unwrap());
    let repo = Arc::new(SqliteHoldingRepository::new(pool));
    (HoldingService::new(repo), dir)
}

#[test]
fn profit_loss_is_price_delta_times_quantity() {
    let mut holding = Holding::from_new(new_holding("Infosys", "INFY", 12.0, 1500.0));
    holding.current_price = Some(1650.0);

    assert_eq!(holding.profit_loss(), (1650.0 - 1500.0) * 12.0);
    assert_eq!(holding.market_value(), 12.0 * 1650.0);
    assert_eq!(holding.invested_value(), 12.0 * 1500.0);
}

#[test]
fn unpriced_holding_breaks_even() {
    let holding = Holding::from_new(new_holding("Infosys", "INFY", 12.0, 1500.0));

    assert_eq!(holding.effective_price(), 1500.0);
    assert_eq!(holding.profit_loss(), 0.0);
}

#[test]
fn loss_is_negative() {
    let mut holding = Holding::from_new(new_holding("Infosys", "INFY", 5.0, 1500.0));
    holding.current_price = Some(1400.0);

    assert_eq!(holding.profit_loss(), -500.0);
}

#[test]
fn validation_rejects_bad_input() {
    assert!(new_holding("", "INFY", 1.0, 10.0).validate().is_err());
    assert!(new_holding("Infosys", "", 1.0, 10.0).validate().is_err());
    assert!(new_holding("Infosys", "INFY", -1.0, 10.0).validate().is_err());
    assert!(new_holding("Infosys", "INFY", 1.0, f64::NAN).validate().is_err());

    let mut bad_type = new_holding("Infosys", "INFY", 1.0, 10.0);
    bad_type.holding_type = "bond".to_string();
    assert!(bad_type.validate().is_err());

    assert!(new_holding("Infosys", "INFY", 1.0, 10.0).validate().is_ok());
}

#[tokio::test]
async fn create_get_update_round_trip() {
    let (service, _dir) = test_service();

    let created = service
        .create_holding(new_holding("Tata Steel", "TATASTEEL", 100.0, 120.0))
        .await
        .unwrap();
    assert_eq!(created.symbol, "TATASTEEL");

    let fetched = service.get_holding(&created.id).unwrap();
    assert_eq!(fetched.name, "Tata Steel");

    let update = UpdateHolding {
        quantity: Some(150.0),
        ..Default::default()
    };
    let updated = service.update_holding(&created.id, update).await.unwrap();
    assert_eq!(updated.quantity, 150.0);
    assert_eq!(updated.avg_price, 120.0);
}

#[tokio::test]
async fn omitted_fields_are_left_unchanged() {
    let (service, _dir) = test_service();

    let mut new = new_holding("Tata Steel", "TATASTEEL", 100.0, 120.0);
    new.sector = Some("Metals".to_string());
    new.current_price = Some(130.0);
    let created = service.create_holding(new).await.unwrap();

    let update = UpdateHolding {
        name: Some("Tata Steel Ltd".to_string()),
        ..Default::default()
    };
    let updated = service.update_holding(&created.id, update).await.unwrap();

    assert_eq!(updated.name, "Tata Steel Ltd");
    assert_eq!(updated.sector.as_deref(), Some("Metals"));
    assert_eq!(updated.current_price, Some(130.0));
}

#[tokio::test]
async fn deleted_holding_disappears_from_list() {
    let (service, _dir) = test_service();

    let keep = service
        .create_holding(new_holding("Infosys", "INFY", 10.0, 1500.0))
        .await
        .unwrap();
    let doomed = service
        .create_holding(new_holding("Wipro", "WIPRO", 20.0, 400.0))
        .await
        .unwrap();

    assert_eq!(service.get_holdings().unwrap().len(), 2);

    service.delete_holding(doomed.id.clone()).await.unwrap();

    let remaining = service.get_holdings().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, keep.id);
    assert!(service.get_holding(&doomed.id).is_err());
}

#[tokio::test]
async fn portfolio_value_prices_unrefreshed_holdings_at_cost() {
    let (service, _dir) = test_service();

    let holding = service
        .create_holding(new_holding("Infosys", "INFY", 10.0, 1500.0))
        .await
        .unwrap();
    assert_eq!(service.portfolio_value().unwrap(), 15000.0);

    let update = UpdateHolding {
        current_price: Some(1600.0),
        ..Default::default()
    };
    service.update_holding(&holding.id, update).await.unwrap();
    assert_eq!(service.portfolio_value().unwrap(), 16000.0);
}
