use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::Result;
use crate::market_data::{MarketDataProviderTrait, MarketDataService};
use crate::wishlist::wishlist_model::{NewWishlistItem, WishlistAlert, WishlistItem};
use crate::wishlist::wishlist_traits::{WishlistRepositoryTrait, WishlistServiceTrait};

pub struct WishlistService<T: WishlistRepositoryTrait> {
    wishlist_repo: Arc<T>,
}

impl<T: WishlistRepositoryTrait> WishlistService<T> {
    pub fn new(wishlist_repo: Arc<T>) -> Self {
        WishlistService { wishlist_repo }
    }

    /// Items whose target entry price has been reached.
    pub fn alerts(&self) -> Result<Vec<WishlistAlert>> {
        Ok(self
            .wishlist_repo
            .load_items()?
            .iter()
            .filter(|item| item.alert_triggered())
            .map(WishlistAlert::from)
            .collect())
    }

    /// Refresh tracked prices so alert checks see current market data.
    /// Symbols that fail keep their stored price.
    pub async fn refresh_prices<P: MarketDataProviderTrait>(
        &self,
        market: &MarketDataService<P>,
    ) -> Result<usize> {
        let items = self.wishlist_repo.load_items()?;
        let mut updated = 0;

        for item in items {
            match market.fetch_price_f64(&item.symbol).await {
                Ok(price) => {
                    self.wishlist_repo.set_current_price(&item.id, price).await?;
                    updated += 1;
                }
                Err(e) => {
                    log::warn!("wishlist price refresh failed for {}: {}", item.symbol, e);
                }
            }
        }

        Ok(updated)
    }
}

#[async_trait]
impl<T: WishlistRepositoryTrait> WishlistServiceTrait for WishlistService<T> {
    fn get_items(&self) -> Result<Vec<WishlistItem>> {
        self.wishlist_repo.load_items()
    }

    async fn create_item(&self, new_item: NewWishlistItem) -> Result<WishlistItem> {
        new_item.validate()?;
        self.wishlist_repo
            .insert_new_item(WishlistItem::from_new(new_item))
            .await
    }

    async fn delete_item(&self, item_id: String) -> Result<usize> {
        self.wishlist_repo.delete_item(item_id).await
    }
}
