use async_trait::async_trait;

use crate::errors::Result;
use crate::preferences::preferences_model::{PreferencesPayload, UserPreference};

#[async_trait]
pub trait PreferencesRepositoryTrait: Send + Sync {
    fn get_by_email(&self, email: &str) -> Result<UserPreference>;
    fn load_summary_recipients(&self) -> Result<Vec<UserPreference>>;
    async fn upsert(&self, payload: PreferencesPayload) -> Result<UserPreference>;
}

#[async_trait]
pub trait PreferencesServiceTrait: Send + Sync {
    fn get_preferences(&self, email: &str) -> Result<UserPreference>;
    fn summary_recipients(&self) -> Result<Vec<UserPreference>>;
    async fn upsert_preferences(&self, payload: PreferencesPayload) -> Result<UserPreference>;
}
