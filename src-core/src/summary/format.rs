//! HTML rendering of the daily summary email.

use std::fmt::Write;

use crate::summary::summary_model::{ActionKind, DailySummary};

pub fn format_summary_email(summary: &DailySummary) -> String {
    let mut html = String::new();

    let _ = write!(
        html,
        r#"<html>
<head>
<style>
    body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
    .header {{ background-color: #4F46E5; color: white; padding: 20px; }}
    .section {{ margin: 20px 0; padding: 15px; background-color: #f9f9f9; border-radius: 5px; }}
    .positive {{ color: #10B981; }}
    .negative {{ color: #EF4444; }}
    .item {{ padding: 10px; margin: 5px 0; background-color: white; border-left: 4px solid #4F46E5; }}
</style>
</head>
<body>
<div class="header">
    <h1>Your Daily Portfolio Summary</h1>
    <p>{date}</p>
</div>
<div class="section">
    <h2>Portfolio Overview</h2>
    <p><strong>Total Value:</strong> ₹{value:.2}</p>
    <p><strong>Invested:</strong> ₹{invested:.2}</p>
    <p class="{pl_class}"><strong>Profit/Loss:</strong> {pl_arrow} ₹{pl_abs:.2}</p>
</div>
"#,
        date = summary.date,
        value = summary.portfolio_value,
        invested = summary.invested_value,
        pl_class = if summary.profit_loss >= 0.0 { "positive" } else { "negative" },
        pl_arrow = if summary.profit_loss >= 0.0 { "▲" } else { "▼" },
        pl_abs = summary.profit_loss.abs(),
    );

    html.push_str("<div class=\"section\">\n<h2>Action Items</h2>\n");
    if summary.action_items.is_empty() {
        html.push_str("<p>No immediate actions required.</p>\n");
    } else {
        for item in &summary.action_items {
            let label = match item.kind {
                ActionKind::Sell => "SELL",
                ActionKind::BuyMore => "BUY MORE",
            };
            let _ = write!(
                html,
                "<div class=\"item\"><strong>{}:</strong> {} ({})<br/><em>{}</em></div>\n",
                label,
                escape(&item.name),
                escape(&item.symbol),
                escape(&item.reason),
            );
        }
    }
    html.push_str("</div>\n");

    html.push_str("<div class=\"section\">\n<h2>New Opportunities</h2>\n");
    if summary.new_opportunities.is_empty() {
        html.push_str("<p>No new opportunities identified.</p>\n");
    } else {
        for opp in &summary.new_opportunities {
            let _ = write!(
                html,
                "<div class=\"item\"><strong>{} ({})</strong><br/>Sector: {}<br/>Current: ₹{:.2} → Target: ₹{:.2}<br/><em>{}</em></div>\n",
                escape(&opp.name),
                escape(&opp.symbol),
                escape(opp.sector.as_deref().unwrap_or("Unknown")),
                opp.current_price,
                opp.target_price,
                escape(&opp.reasoning),
            );
        }
    }
    html.push_str("</div>\n");

    html.push_str("<div class=\"section\">\n<h2>Wishlist Alerts</h2>\n");
    if summary.wishlist_alerts.is_empty() {
        html.push_str("<p>No wishlist alerts today.</p>\n");
    } else {
        for alert in &summary.wishlist_alerts {
            let _ = write!(
                html,
                "<div class=\"item\"><strong>{} ({})</strong><br/>Current: ₹{:.2} | Target: ₹{:.2}<br/><em>Below target price - good entry point</em></div>\n",
                escape(&alert.name),
                escape(&alert.symbol),
                alert.current_price,
                alert.target_price,
            );
        }
    }
    html.push_str("</div>\n");

    html.push_str("<div class=\"section\">\n<h2>Goal Progress</h2>\n");
    if summary.goal_progress.is_empty() {
        html.push_str("<p>No goals set yet.</p>\n");
    } else {
        for goal in &summary.goal_progress {
            let _ = write!(
                html,
                "<div class=\"item\"><strong>{}</strong><br/>Progress: {:.1}% (₹{:.0} / ₹{:.0})</div>\n",
                escape(&goal.name),
                goal.progress_percent,
                goal.current,
                goal.target,
            );
        }
    }
    html.push_str("</div>\n</body>\n</html>\n");

    html
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
