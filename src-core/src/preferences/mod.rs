pub mod preferences_model;
pub mod preferences_repository;
pub mod preferences_service;
pub mod preferences_traits;

pub use preferences_model::{
    parse_notification_time, PreferencesPayload, PreferencesResponse, UserPreference,
};
pub use preferences_repository::SqlitePreferencesRepository;
pub use preferences_service::PreferencesService;
pub use preferences_traits::{PreferencesRepositoryTrait, PreferencesServiceTrait};
