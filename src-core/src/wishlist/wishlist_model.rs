use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};
use crate::schema::wishlist;

/// A symbol not currently held, tracked for a target entry price.
#[derive(Debug, Clone, Queryable, Identifiable, Insertable, Serialize, Deserialize)]
#[diesel(table_name = wishlist)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub current_price: f64,
    pub target_price: f64,
    pub sector: Option<String>,
    pub reasoning: Option<String>,
    pub created_at: NaiveDateTime,
}

impl WishlistItem {
    pub fn from_new(new: NewWishlistItem) -> Self {
        WishlistItem {
            id: uuid::Uuid::new_v4().to_string(),
            name: new.name,
            symbol: new.symbol,
            current_price: new.current_price,
            target_price: new.target_price,
            sector: new.sector,
            reasoning: new.reasoning,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }

    /// An alert fires iff the market has reached the target entry price.
    pub fn alert_triggered(&self) -> bool {
        self.current_price <= self.target_price
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWishlistItem {
    pub name: String,
    pub symbol: String,
    pub current_price: f64,
    pub target_price: f64,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub reasoning: Option<String>,
}

impl NewWishlistItem {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(invalid("Wishlist item name must not be empty"));
        }
        if self.symbol.trim().is_empty() {
            return Err(invalid("Wishlist item symbol must not be empty"));
        }
        if self.target_price <= 0.0 || !self.target_price.is_finite() {
            return Err(invalid("Wishlist target price must be positive"));
        }
        if self.current_price < 0.0 || !self.current_price.is_finite() {
            return Err(invalid("Wishlist current price must be non-negative"));
        }
        Ok(())
    }
}

/// A wishlist item whose target entry price has been reached.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistAlert {
    pub symbol: String,
    pub name: String,
    pub current_price: f64,
    pub target_price: f64,
}

impl From<&WishlistItem> for WishlistAlert {
    fn from(item: &WishlistItem) -> Self {
        WishlistAlert {
            symbol: item.symbol.clone(),
            name: item.name.clone(),
            current_price: item.current_price,
            target_price: item.target_price,
        }
    }
}

fn invalid(msg: &str) -> Error {
    Error::Validation(ValidationError::InvalidInput(msg.to_string()))
}
