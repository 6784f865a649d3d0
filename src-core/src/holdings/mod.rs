pub mod holdings_model;
pub mod holdings_repository;
pub mod holdings_service;
pub mod holdings_traits;

pub use holdings_model::{
    AnalyzeReport, FailedSymbol, Holding, NewHolding, PriceRefreshReport, UpdateHolding,
};
pub use holdings_repository::SqliteHoldingRepository;
pub use holdings_service::HoldingService;
pub use holdings_traits::{HoldingRepositoryTrait, HoldingServiceTrait};
