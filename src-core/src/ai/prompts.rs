//! Prompt construction for the analysis and opportunity calls.

use crate::ai::models::TimeHorizon;
use crate::holdings::holdings_model::Holding;

/// Ask for one BUY/HOLD/SELL call per horizon, as a strict JSON object
/// keyed by horizon name.
pub fn build_analysis_prompt(holding: &Holding) -> String {
    let horizon_lines: Vec<String> = TimeHorizon::ALL
        .iter()
        .map(|h| format!(r#"  "{}": {{"action": "BUY/HOLD/SELL", "reason": "brief reason"}}"#, h.as_str()))
        .collect();

    format!(
        r#"Analyze this Indian investment and provide recommendations:

Stock: {name} ({symbol})
Type: {holding_type}
Sector: {sector}
Average Price: ₹{avg_price}
Current Price: ₹{current_price}
Quantity: {quantity}

Provide recommendations (BUY/HOLD/SELL) with brief reasoning for each time horizon.

RESPOND ONLY WITH THIS JSON FORMAT:
{{
{horizons}
}}"#,
        name = holding.name,
        symbol = holding.symbol,
        holding_type = holding.holding_type,
        sector = holding.sector.as_deref().unwrap_or("Unknown"),
        avg_price = holding.avg_price,
        current_price = holding.effective_price(),
        quantity = holding.quantity,
        horizons = horizon_lines.join(",\n"),
    )
}

/// Ask for up to three fresh stock ideas matching the user's profile.
pub fn build_opportunity_prompt(risk_profile: &str, preferred_sectors: &[String]) -> String {
    let sectors = if preferred_sectors.is_empty() {
        "Any".to_string()
    } else {
        preferred_sectors.join(", ")
    };

    format!(
        r#"Based on current Indian market conditions, suggest 3 stocks for investment.

Risk Profile: {risk_profile}
Preferred Sectors: {sectors}

For each stock, provide:
- Name
- Symbol
- Sector
- Current Price (estimate)
- Target Price
- Reasoning (2-3 sentences)

RESPOND ONLY WITH THIS JSON FORMAT:
[
  {{
    "name": "Company Name",
    "symbol": "SYMBOL",
    "sector": "Sector",
    "currentPrice": 0,
    "targetPrice": 0,
    "reasoning": "Why this is a good opportunity"
  }}
]"#
    )
}
