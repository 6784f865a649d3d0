pub mod wishlist_model;
pub mod wishlist_repository;
pub mod wishlist_service;
pub mod wishlist_traits;

pub use wishlist_model::{NewWishlistItem, WishlistAlert, WishlistItem};
pub use wishlist_repository::SqliteWishlistRepository;
pub use wishlist_service::WishlistService;
pub use wishlist_traits::{WishlistRepositoryTrait, WishlistServiceTrait};
