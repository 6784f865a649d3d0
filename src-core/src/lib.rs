//! Portfolio Advisor core.
//!
//! Domain services for a personal portfolio tracker: holdings, goals,
//! wishlist and user preferences over SQLite, live prices from Yahoo
//! Finance, BUY/HOLD/SELL recommendations from a configured AI provider,
//! and a daily email summary.

pub mod ai;
pub mod db;
pub mod errors;
pub mod goals;
pub mod holdings;
pub mod market_data;
pub mod preferences;
pub mod schema;
pub mod summary;
pub mod wishlist;
