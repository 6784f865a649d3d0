use serde::{Deserialize, Serialize};

use crate::ai::models::Opportunity;
use crate::goals::goals_model::GoalProgress;
use crate::wishlist::wishlist_model::WishlistAlert;

/// Aggregated snapshot of the portfolio, rendered into the daily email.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
    pub date: String,
    pub portfolio_value: f64,
    pub invested_value: f64,
    pub profit_loss: f64,
    pub action_items: Vec<ActionItem>,
    pub new_opportunities: Vec<Opportunity>,
    pub wishlist_alerts: Vec<WishlistAlert>,
    pub goal_progress: Vec<GoalProgress>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    #[serde(rename = "SELL")]
    Sell,
    #[serde(rename = "BUY_MORE")]
    BuyMore,
}

/// A near-term signal lifted from a holding's stored recommendations.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionItem {
    #[serde(rename = "type")]
    pub kind: ActionKind,
    pub symbol: String,
    pub name: String,
    pub reason: String,
}
