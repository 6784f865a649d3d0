use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::ai::models::RecommendationSet;
use crate::errors::{Error, Result, ValidationError};
use crate::schema::holdings;

pub const HOLDING_TYPE_STOCK: &str = "stock";
pub const HOLDING_TYPE_FUND: &str = "fund";

/// A tracked stock or fund position.
#[derive(Debug, Clone, Queryable, Identifiable, Insertable, Serialize, Deserialize)]
#[diesel(table_name = holdings)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub id: String,
    pub name: String,
    pub symbol: String,
    #[serde(rename = "type")]
    pub holding_type: String,
    pub quantity: f64,
    pub avg_price: f64,
    pub current_price: Option<f64>,
    pub sector: Option<String>,
    /// JSON blob of per-horizon recommendations, set by the analyze path.
    /// Not serialized; the API exposes the parsed form instead.
    #[serde(skip_serializing)]
    pub recommendations: Option<String>,
    pub last_updated: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

impl Holding {
    pub fn from_new(new: NewHolding) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Holding {
            id: uuid::Uuid::new_v4().to_string(),
            name: new.name,
            symbol: new.symbol,
            holding_type: new.holding_type,
            quantity: new.quantity,
            avg_price: new.avg_price,
            current_price: new.current_price,
            sector: new.sector,
            recommendations: None,
            last_updated: now,
            created_at: now,
        }
    }

    /// Current price when known, falling back to the purchase average.
    pub fn effective_price(&self) -> f64 {
        self.current_price.unwrap_or(self.avg_price)
    }

    pub fn market_value(&self) -> f64 {
        self.quantity * self.effective_price()
    }

    pub fn invested_value(&self) -> f64 {
        self.quantity * self.avg_price
    }

    /// profit/loss = (current_price - avg_price) * quantity
    pub fn profit_loss(&self) -> f64 {
        (self.effective_price() - self.avg_price) * self.quantity
    }

    pub fn parsed_recommendations(&self) -> Option<RecommendationSet> {
        self.recommendations
            .as_deref()
            .and_then(|json| serde_json::from_str(json).ok())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHolding {
    pub name: String,
    pub symbol: String,
    #[serde(rename = "type")]
    pub holding_type: String,
    pub quantity: f64,
    pub avg_price: f64,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub sector: Option<String>,
}

impl NewHolding {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return invalid("Holding name must not be empty");
        }
        if self.symbol.trim().is_empty() {
            return invalid("Holding symbol must not be empty");
        }
        if self.holding_type != HOLDING_TYPE_STOCK && self.holding_type != HOLDING_TYPE_FUND {
            return invalid("Holding type must be 'stock' or 'fund'");
        }
        if self.quantity < 0.0 || !self.quantity.is_finite() {
            return invalid("Holding quantity must be a non-negative number");
        }
        if self.avg_price < 0.0 || !self.avg_price.is_finite() {
            return invalid("Holding average price must be a non-negative number");
        }
        if let Some(price) = self.current_price {
            if price < 0.0 || !price.is_finite() {
                return invalid("Holding current price must be a non-negative number");
            }
        }
        Ok(())
    }
}

/// Partial edit; only the provided fields are written. `None` always means
/// "leave unchanged", so the nullable columns (`sector`, `current_price`)
/// cannot be cleared back to NULL through this payload.
#[derive(Debug, Clone, Default, Deserialize, AsChangeset)]
#[diesel(table_name = holdings)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHolding {
    pub name: Option<String>,
    pub symbol: Option<String>,
    #[serde(rename = "type")]
    pub holding_type: Option<String>,
    pub quantity: Option<f64>,
    pub avg_price: Option<f64>,
    pub current_price: Option<f64>,
    pub sector: Option<String>,
}

impl UpdateHolding {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.symbol.is_none()
            && self.holding_type.is_none()
            && self.quantity.is_none()
            && self.avg_price.is_none()
            && self.current_price.is_none()
            && self.sector.is_none()
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return invalid("Holding name must not be empty");
            }
        }
        if let Some(symbol) = &self.symbol {
            if symbol.trim().is_empty() {
                return invalid("Holding symbol must not be empty");
            }
        }
        if let Some(t) = &self.holding_type {
            if t != HOLDING_TYPE_STOCK && t != HOLDING_TYPE_FUND {
                return invalid("Holding type must be 'stock' or 'fund'");
            }
        }
        for value in [self.quantity, self.avg_price, self.current_price]
            .into_iter()
            .flatten()
        {
            if value < 0.0 || !value.is_finite() {
                return invalid("Holding numeric fields must be non-negative");
            }
        }
        Ok(())
    }
}

/// Outcome of a batch price refresh. One symbol failing never aborts the
/// rest of the batch; it lands here instead.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRefreshReport {
    pub updated: Vec<String>,
    pub failed: Vec<FailedSymbol>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FailedSymbol {
    pub symbol: String,
    pub reason: String,
}

/// Outcome of a batch analyze pass.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeReport {
    pub analyzed: usize,
    pub total: usize,
    pub failed: Vec<FailedSymbol>,
}

fn invalid(msg: &str) -> Result<()> {
    Err(Error::Validation(ValidationError::InvalidInput(
        msg.to_string(),
    )))
}
