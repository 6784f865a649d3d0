use async_trait::async_trait;

use crate::errors::Result;
use crate::wishlist::wishlist_model::{NewWishlistItem, WishlistItem};

#[async_trait]
pub trait WishlistRepositoryTrait: Send + Sync {
    fn load_items(&self) -> Result<Vec<WishlistItem>>;
    async fn insert_new_item(&self, item: WishlistItem) -> Result<WishlistItem>;
    async fn delete_item(&self, item_id: String) -> Result<usize>;
    async fn set_current_price(&self, item_id: &str, price: f64) -> Result<WishlistItem>;
}

#[async_trait]
pub trait WishlistServiceTrait: Send + Sync {
    fn get_items(&self) -> Result<Vec<WishlistItem>>;
    async fn create_item(&self, new_item: NewWishlistItem) -> Result<WishlistItem>;
    async fn delete_item(&self, item_id: String) -> Result<usize>;
}
