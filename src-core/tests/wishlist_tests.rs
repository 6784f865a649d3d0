//! Wishlist alert predicate and service behavior.

use std::sync::Arc;

use advisor_core::db;
use advisor_core::wishlist::{
    NewWishlistItem, SqliteWishlistRepository, WishlistItem, WishlistService, WishlistServiceTrait,
};

fn new_item(symbol: &str, current: f64, target: f64) -> NewWishlistItem {
    NewWishlistItem {
        name: format!("{} Ltd", symbol),
        symbol: symbol.to_string(),
        current_price: current,
        target_price: target,
        sector: None,
        reasoning: None,
    }
}

#[test]
fn alert_fires_iff_price_at_or_below_target() {
    let above = WishlistItem::from_new(new_item("HDFC", 1650.0, 1600.0));
    assert!(!above.alert_triggered());

    let at_target = WishlistItem::from_new(new_item("HDFC", 1600.0, 1600.0));
    assert!(at_target.alert_triggered());

    let below = WishlistItem::from_new(new_item("HDFC", 1550.0, 1600.0));
    assert!(below.alert_triggered());
}

#[test]
fn validation_rejects_bad_input() {
    assert!(new_item("", 100.0, 90.0).validate().is_err());
    assert!(new_item("HDFC", 100.0, 0.0).validate().is_err());
    assert!(new_item("HDFC", -1.0, 90.0).validate().is_err());
    assert!(new_item("HDFC", 100.0, 90.0).validate().is_ok());
}

#[tokio::test]
async fn alerts_cover_only_triggered_items() {
    let dir = tempfile::tempdir().unwrap();
    let url = dir.path().join("test.db").to_string_lossy().into_owned();
    let pool = Arc::new(db::create_pool(&url).unwrap());
    let service = WishlistService::new(Arc::new(SqliteWishlistRepository::new(pool)));

    service.create_item(new_item("HDFC", 1550.0, 1600.0)).await.unwrap();
    service.create_item(new_item("ITC", 450.0, 400.0)).await.unwrap();

    let alerts = service.alerts().unwrap();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].symbol, "HDFC");
}

#[tokio::test]
async fn deleted_item_disappears_from_list() {
    let dir = tempfile::tempdir().unwrap();
    let url = dir.path().join("test.db").to_string_lossy().into_owned();
    let pool = Arc::new(db::create_pool(&url).unwrap());
    let service = WishlistService::new(Arc::new(SqliteWishlistRepository::new(pool)));

    let item = service.create_item(new_item("HDFC", 1550.0, 1600.0)).await.unwrap();
    service.delete_item(item.id).await.unwrap();
    assert!(service.get_items().unwrap().is_empty());
}
