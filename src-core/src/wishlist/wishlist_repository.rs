use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use crate::db::DbPool;
use crate::errors::{Error, Result};
use crate::schema::wishlist;
use crate::wishlist::wishlist_model::WishlistItem;
use crate::wishlist::wishlist_traits::WishlistRepositoryTrait;

pub struct SqliteWishlistRepository {
    pool: Arc<DbPool>,
}

impl SqliteWishlistRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        SqliteWishlistRepository { pool }
    }
}

#[async_trait]
impl WishlistRepositoryTrait for SqliteWishlistRepository {
    fn load_items(&self) -> Result<Vec<WishlistItem>> {
        let mut conn = self.pool.get()?;
        Ok(wishlist::table
            .order(wishlist::created_at.asc())
            .load::<WishlistItem>(&mut conn)?)
    }

    async fn insert_new_item(&self, item: WishlistItem) -> Result<WishlistItem> {
        let mut conn = self.pool.get()?;
        Ok(diesel::insert_into(wishlist::table)
            .values(&item)
            .get_result::<WishlistItem>(&mut conn)?)
    }

    async fn delete_item(&self, item_id: String) -> Result<usize> {
        let mut conn = self.pool.get()?;
        let deleted = diesel::delete(wishlist::table.find(&item_id)).execute(&mut conn)?;
        if deleted == 0 {
            return Err(Error::NotFound(format!("Wishlist item '{}'", item_id)));
        }
        Ok(deleted)
    }

    async fn set_current_price(&self, item_id: &str, price: f64) -> Result<WishlistItem> {
        let mut conn = self.pool.get()?;
        diesel::update(wishlist::table.find(item_id))
            .set(wishlist::current_price.eq(price))
            .get_result::<WishlistItem>(&mut conn)
            .optional()?
            .ok_or_else(|| Error::NotFound(format!("Wishlist item '{}'", item_id)))
    }
}
