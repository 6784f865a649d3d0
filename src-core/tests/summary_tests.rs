//! Summary aggregation and email rendering over fixed in-memory state.

use chrono::NaiveDate;

use advisor_core::ai::models::Opportunity;
use advisor_core::goals::{Goal, NewGoal};
use advisor_core::holdings::{Holding, NewHolding};
use advisor_core::summary::{build_summary, format_summary_email, ActionKind};
use advisor_core::wishlist::{NewWishlistItem, WishlistItem};

fn holding(symbol: &str, quantity: f64, avg: f64, current: f64) -> Holding {
    let mut holding = Holding::from_new(NewHolding {
        name: format!("{} Ltd", symbol),
        symbol: symbol.to_string(),
        holding_type: "stock".to_string(),
        quantity,
        avg_price: avg,
        current_price: None,
        sector: None,
    });
    holding.current_price = Some(current);
    holding
}

fn with_recommendation(mut holding: Holding, action: &str) -> Holding {
    holding.recommendations = Some(format!(
        r#"{{"1m": {{"action": "{}", "reason": "near-term signal"}}}}"#,
        action
    ));
    holding
}

fn goal(name: &str, target: f64) -> Goal {
    Goal::from_new(NewGoal {
        name: name.to_string(),
        target_amount: target,
        current_amount: 0.0,
        time_horizon: "3-5y".to_string(),
        priority: "medium".to_string(),
    })
}

fn wishlist_item(symbol: &str, current: f64, target: f64) -> WishlistItem {
    WishlistItem::from_new(NewWishlistItem {
        name: format!("{} Ltd", symbol),
        symbol: symbol.to_string(),
        current_price: current,
        target_price: target,
        sector: None,
        reasoning: None,
    })
}

fn opportunity(symbol: &str) -> Opportunity {
    Opportunity {
        name: format!("{} Ltd", symbol),
        symbol: symbol.to_string(),
        sector: Some("IT".to_string()),
        current_price: 100.0,
        target_price: 140.0,
        reasoning: "strong order book".to_string(),
    }
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

#[test]
fn totals_sum_over_holdings() {
    let holdings = vec![
        holding("INFY", 10.0, 1500.0, 1600.0),
        holding("WIPRO", 20.0, 400.0, 380.0),
    ];

    let summary = build_summary(&holdings, &[], &[], Vec::new(), date());

    assert_eq!(summary.portfolio_value, 10.0 * 1600.0 + 20.0 * 380.0);
    assert_eq!(summary.invested_value, 10.0 * 1500.0 + 20.0 * 400.0);
    assert_eq!(summary.profit_loss, 1000.0 - 400.0);
    assert_eq!(summary.date, "2026-03-02");
}

#[test]
fn near_term_recommendations_become_action_items() {
    let holdings = vec![
        with_recommendation(holding("SELLME", 1.0, 10.0, 12.0), "SELL"),
        with_recommendation(holding("BUYME", 1.0, 10.0, 8.0), "BUY"),
        with_recommendation(holding("KEEPME", 1.0, 10.0, 10.0), "HOLD"),
        holding("QUIET", 1.0, 10.0, 10.0),
    ];

    let summary = build_summary(&holdings, &[], &[], Vec::new(), date());

    assert_eq!(summary.action_items.len(), 2);
    assert_eq!(summary.action_items[0].kind, ActionKind::Sell);
    assert_eq!(summary.action_items[0].symbol, "SELLME");
    assert_eq!(summary.action_items[1].kind, ActionKind::BuyMore);
    assert_eq!(summary.action_items[1].symbol, "BUYME");
}

#[test]
fn only_triggered_wishlist_items_alert() {
    let wishlist = vec![
        wishlist_item("CHEAP", 90.0, 100.0),
        wishlist_item("EXACT", 100.0, 100.0),
        wishlist_item("DEAR", 110.0, 100.0),
    ];

    let summary = build_summary(&[], &[], &wishlist, Vec::new(), date());

    let symbols: Vec<&str> = summary
        .wishlist_alerts
        .iter()
        .map(|a| a.symbol.as_str())
        .collect();
    assert_eq!(symbols, ["CHEAP", "EXACT"]);
}

#[test]
fn goal_progress_uses_portfolio_value() {
    let holdings = vec![holding("INFY", 10.0, 1500.0, 1600.0)];
    let goals = vec![goal("House", 64000.0)];

    let summary = build_summary(&holdings, &goals, &[], Vec::new(), date());

    assert_eq!(summary.goal_progress.len(), 1);
    assert_eq!(summary.goal_progress[0].progress_percent, 25.0);
}

#[test]
fn opportunities_are_capped_at_three() {
    let opportunities = vec![
        opportunity("A"),
        opportunity("B"),
        opportunity("C"),
        opportunity("D"),
    ];

    let summary = build_summary(&[], &[], &[], opportunities, date());
    assert_eq!(summary.new_opportunities.len(), 3);
}

#[test]
fn email_renders_key_figures_and_escapes_html() {
    let mut holdings = vec![holding("INFY", 10.0, 1500.0, 1600.0)];
    holdings[0].name = "Infosys <Ltd>".to_string();
    holdings[0] = with_recommendation(holdings[0].clone(), "SELL");

    let summary = build_summary(&holdings, &[], &[], Vec::new(), date());
    let html = format_summary_email(&summary);

    assert!(html.contains("Your Daily Portfolio Summary"));
    assert!(html.contains("2026-03-02"));
    assert!(html.contains("₹16000.00"));
    assert!(html.contains("Infosys &lt;Ltd&gt;"));
    assert!(!html.contains("<Ltd>"));
}
