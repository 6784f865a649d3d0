use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use crate::db::DbPool;
use crate::errors::{Error, Result};
use crate::holdings::holdings_model::{Holding, UpdateHolding};
use crate::holdings::holdings_traits::HoldingRepositoryTrait;
use crate::schema::{holdings, price_history};

pub struct SqliteHoldingRepository {
    pool: Arc<DbPool>,
}

impl SqliteHoldingRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        SqliteHoldingRepository { pool }
    }
}

#[async_trait]
impl HoldingRepositoryTrait for SqliteHoldingRepository {
    fn load_holdings(&self) -> Result<Vec<Holding>> {
        let mut conn = self.pool.get()?;
        Ok(holdings::table
            .order(holdings::created_at.asc())
            .load::<Holding>(&mut conn)?)
    }

    fn get_holding(&self, holding_id: &str) -> Result<Holding> {
        let mut conn = self.pool.get()?;
        holdings::table
            .find(holding_id)
            .first::<Holding>(&mut conn)
            .optional()?
            .ok_or_else(|| Error::NotFound(format!("Holding '{}'", holding_id)))
    }

    async fn insert_new_holding(&self, holding: Holding) -> Result<Holding> {
        let mut conn = self.pool.get()?;
        Ok(diesel::insert_into(holdings::table)
            .values(&holding)
            .get_result::<Holding>(&mut conn)?)
    }

    async fn update_holding(&self, holding_id: &str, update: UpdateHolding) -> Result<Holding> {
        if update.is_empty() {
            return self.get_holding(holding_id);
        }
        let mut conn = self.pool.get()?;
        diesel::update(holdings::table.find(holding_id))
            .set((
                &update,
                holdings::last_updated.eq(chrono::Utc::now().naive_utc()),
            ))
            .get_result::<Holding>(&mut conn)
            .optional()?
            .ok_or_else(|| Error::NotFound(format!("Holding '{}'", holding_id)))
    }

    async fn delete_holding(&self, holding_id: String) -> Result<usize> {
        let mut conn = self.pool.get()?;
        let deleted = diesel::delete(holdings::table.find(&holding_id)).execute(&mut conn)?;
        if deleted == 0 {
            return Err(Error::NotFound(format!("Holding '{}'", holding_id)));
        }
        Ok(deleted)
    }

    async fn set_current_price(&self, holding_id: &str, price: f64) -> Result<Holding> {
        let mut conn = self.pool.get()?;
        diesel::update(holdings::table.find(holding_id))
            .set((
                holdings::current_price.eq(Some(price)),
                holdings::last_updated.eq(chrono::Utc::now().naive_utc()),
            ))
            .get_result::<Holding>(&mut conn)
            .optional()?
            .ok_or_else(|| Error::NotFound(format!("Holding '{}'", holding_id)))
    }

    async fn set_recommendations(&self, holding_id: &str, json: String) -> Result<Holding> {
        let mut conn = self.pool.get()?;
        diesel::update(holdings::table.find(holding_id))
            .set((
                holdings::recommendations.eq(Some(json)),
                holdings::last_updated.eq(chrono::Utc::now().naive_utc()),
            ))
            .get_result::<Holding>(&mut conn)
            .optional()?
            .ok_or_else(|| Error::NotFound(format!("Holding '{}'", holding_id)))
    }

    async fn record_price(&self, symbol: &str, price: f64) -> Result<()> {
        let mut conn = self.pool.get()?;
        diesel::insert_into(price_history::table)
            .values((
                price_history::id.eq(uuid::Uuid::new_v4().to_string()),
                price_history::symbol.eq(symbol),
                price_history::price.eq(price),
                price_history::recorded_at.eq(chrono::Utc::now().naive_utc()),
            ))
            .execute(&mut conn)?;
        Ok(())
    }
}
