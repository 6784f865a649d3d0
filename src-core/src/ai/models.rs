use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The six forward-looking windows every analysis covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TimeHorizon {
    #[serde(rename = "1m")]
    OneMonth,
    #[serde(rename = "1-6m")]
    OneToSixMonths,
    #[serde(rename = "6m-1y")]
    SixMonthsToOneYear,
    #[serde(rename = "1-3y")]
    OneToThreeYears,
    #[serde(rename = "3-5y")]
    ThreeToFiveYears,
    #[serde(rename = "5y+")]
    FivePlusYears,
}

impl TimeHorizon {
    pub const ALL: [TimeHorizon; 6] = [
        TimeHorizon::OneMonth,
        TimeHorizon::OneToSixMonths,
        TimeHorizon::SixMonthsToOneYear,
        TimeHorizon::OneToThreeYears,
        TimeHorizon::ThreeToFiveYears,
        TimeHorizon::FivePlusYears,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeHorizon::OneMonth => "1m",
            TimeHorizon::OneToSixMonths => "1-6m",
            TimeHorizon::SixMonthsToOneYear => "6m-1y",
            TimeHorizon::OneToThreeYears => "1-3y",
            TimeHorizon::ThreeToFiveYears => "3-5y",
            TimeHorizon::FivePlusYears => "5y+",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendationAction {
    #[serde(rename = "BUY")]
    Buy,
    #[serde(rename = "HOLD")]
    Hold,
    #[serde(rename = "SELL")]
    Sell,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub action: RecommendationAction,
    pub reason: String,
}

/// One recommendation per horizon, keyed by the horizon's wire name.
pub type RecommendationSet = BTreeMap<TimeHorizon, Recommendation>;

/// A stock idea suggested for the user's profile, outside current holdings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default, alias = "current_price")]
    pub current_price: f64,
    #[serde(default, alias = "target_price")]
    pub target_price: f64,
    pub reasoning: String,
}
