use async_trait::async_trait;

use crate::errors::Result;
use crate::holdings::holdings_model::{Holding, NewHolding, UpdateHolding};

#[async_trait]
pub trait HoldingRepositoryTrait: Send + Sync {
    fn load_holdings(&self) -> Result<Vec<Holding>>;
    fn get_holding(&self, holding_id: &str) -> Result<Holding>;
    async fn insert_new_holding(&self, holding: Holding) -> Result<Holding>;
    async fn update_holding(&self, holding_id: &str, update: UpdateHolding) -> Result<Holding>;
    async fn delete_holding(&self, holding_id: String) -> Result<usize>;
    async fn set_current_price(&self, holding_id: &str, price: f64) -> Result<Holding>;
    async fn set_recommendations(&self, holding_id: &str, json: String) -> Result<Holding>;
    async fn record_price(&self, symbol: &str, price: f64) -> Result<()>;
}

#[async_trait]
pub trait HoldingServiceTrait: Send + Sync {
    fn get_holdings(&self) -> Result<Vec<Holding>>;
    fn get_holding(&self, holding_id: &str) -> Result<Holding>;
    async fn create_holding(&self, new_holding: NewHolding) -> Result<Holding>;
    async fn update_holding(&self, holding_id: &str, update: UpdateHolding) -> Result<Holding>;
    async fn delete_holding(&self, holding_id: String) -> Result<usize>;
}
