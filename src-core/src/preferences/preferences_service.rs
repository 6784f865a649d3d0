use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::Result;
use crate::preferences::preferences_model::{PreferencesPayload, UserPreference};
use crate::preferences::preferences_traits::{
    PreferencesRepositoryTrait, PreferencesServiceTrait,
};

pub struct PreferencesService<T: PreferencesRepositoryTrait> {
    preferences_repo: Arc<T>,
}

impl<T: PreferencesRepositoryTrait> PreferencesService<T> {
    pub fn new(preferences_repo: Arc<T>) -> Self {
        PreferencesService { preferences_repo }
    }
}

#[async_trait]
impl<T: PreferencesRepositoryTrait> PreferencesServiceTrait for PreferencesService<T> {
    fn get_preferences(&self, email: &str) -> Result<UserPreference> {
        self.preferences_repo.get_by_email(email)
    }

    fn summary_recipients(&self) -> Result<Vec<UserPreference>> {
        self.preferences_repo.load_summary_recipients()
    }

    async fn upsert_preferences(&self, payload: PreferencesPayload) -> Result<UserPreference> {
        payload.validate()?;
        self.preferences_repo.upsert(payload).await
    }
}
