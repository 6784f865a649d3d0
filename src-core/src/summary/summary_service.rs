use chrono::NaiveDate;
use std::sync::Arc;

use crate::ai::models::{Opportunity, RecommendationAction, TimeHorizon};
use crate::ai::AiService;
use crate::errors::Result;
use crate::goals::goals_model::{Goal, GoalProgress};
use crate::goals::goals_traits::GoalRepositoryTrait;
use crate::holdings::holdings_model::Holding;
use crate::holdings::holdings_traits::HoldingRepositoryTrait;
use crate::preferences::preferences_model::UserPreference;
use crate::summary::summary_model::{ActionItem, ActionKind, DailySummary};
use crate::wishlist::wishlist_model::{WishlistAlert, WishlistItem};
use crate::wishlist::wishlist_traits::WishlistRepositoryTrait;

pub struct SummaryService<H, G, W>
where
    H: HoldingRepositoryTrait,
    G: GoalRepositoryTrait,
    W: WishlistRepositoryTrait,
{
    holding_repo: Arc<H>,
    goal_repo: Arc<G>,
    wishlist_repo: Arc<W>,
    ai_service: Option<Arc<AiService>>,
}

impl<H, G, W> SummaryService<H, G, W>
where
    H: HoldingRepositoryTrait,
    G: GoalRepositoryTrait,
    W: WishlistRepositoryTrait,
{
    pub fn new(
        holding_repo: Arc<H>,
        goal_repo: Arc<G>,
        wishlist_repo: Arc<W>,
        ai_service: Option<Arc<AiService>>,
    ) -> Self {
        SummaryService {
            holding_repo,
            goal_repo,
            wishlist_repo,
            ai_service,
        }
    }

    /// Build the daily summary from current state. An AI opportunity
    /// failure degrades to an empty list; everything else is computed
    /// locally and cannot partially fail.
    pub async fn generate(&self, prefs: &UserPreference) -> Result<DailySummary> {
        let holdings = self.holding_repo.load_holdings()?;
        let goals = self.goal_repo.load_goals()?;
        let wishlist = self.wishlist_repo.load_items()?;

        let opportunities = match &self.ai_service {
            Some(ai) => match ai
                .suggest_opportunities(&prefs.risk_profile, &prefs.sectors())
                .await
            {
                Ok(ops) => ops,
                Err(e) => {
                    log::warn!("opportunity generation failed for {}: {}", prefs.email, e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        let today = chrono::Utc::now().date_naive();
        Ok(build_summary(
            &holdings,
            &goals,
            &wishlist,
            opportunities,
            today,
        ))
    }
}

/// Pure aggregation over current state.
pub fn build_summary(
    holdings: &[Holding],
    goals: &[Goal],
    wishlist: &[WishlistItem],
    mut opportunities: Vec<Opportunity>,
    date: NaiveDate,
) -> DailySummary {
    let portfolio_value: f64 = holdings.iter().map(Holding::market_value).sum();
    let invested_value: f64 = holdings.iter().map(Holding::invested_value).sum();
    let profit_loss: f64 = holdings.iter().map(Holding::profit_loss).sum();

    let action_items = holdings.iter().filter_map(action_item_for).collect();

    let wishlist_alerts: Vec<WishlistAlert> = wishlist
        .iter()
        .filter(|item| item.alert_triggered())
        .map(WishlistAlert::from)
        .collect();

    let goal_progress = goals
        .iter()
        .map(|g| GoalProgress::compute(g, portfolio_value))
        .collect();

    opportunities.truncate(3);

    DailySummary {
        date: date.format("%Y-%m-%d").to_string(),
        portfolio_value,
        invested_value,
        profit_loss,
        action_items,
        new_opportunities: opportunities,
        wishlist_alerts,
        goal_progress,
    }
}

/// Lift a near-term action from the stored one-month recommendation.
/// HOLD and holdings without stored analysis produce nothing.
fn action_item_for(holding: &Holding) -> Option<ActionItem> {
    let recommendations = holding.parsed_recommendations()?;
    let near_term = recommendations.get(&TimeHorizon::OneMonth)?;

    let kind = match near_term.action {
        RecommendationAction::Sell => ActionKind::Sell,
        RecommendationAction::Buy => ActionKind::BuyMore,
        RecommendationAction::Hold => return None,
    };

    Some(ActionItem {
        kind,
        symbol: holding.symbol.clone(),
        name: holding.name.clone(),
        reason: near_term.reason.clone(),
    })
}
