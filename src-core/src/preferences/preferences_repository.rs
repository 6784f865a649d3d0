use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use crate::db::DbPool;
use crate::errors::{Error, Result};
use crate::preferences::preferences_model::{PreferencesPayload, UserPreference};
use crate::preferences::preferences_traits::PreferencesRepositoryTrait;
use crate::schema::user_preferences;

pub struct SqlitePreferencesRepository {
    pool: Arc<DbPool>,
}

impl SqlitePreferencesRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        SqlitePreferencesRepository { pool }
    }
}

#[async_trait]
impl PreferencesRepositoryTrait for SqlitePreferencesRepository {
    fn get_by_email(&self, email: &str) -> Result<UserPreference> {
        let mut conn = self.pool.get()?;
        user_preferences::table
            .filter(user_preferences::email.eq(email))
            .first::<UserPreference>(&mut conn)
            .optional()?
            .ok_or_else(|| Error::NotFound(format!("Preferences for '{}'", email)))
    }

    fn load_summary_recipients(&self) -> Result<Vec<UserPreference>> {
        let mut conn = self.pool.get()?;
        Ok(user_preferences::table
            .filter(user_preferences::daily_summary_enabled.eq(true))
            .load::<UserPreference>(&mut conn)?)
    }

    async fn upsert(&self, payload: PreferencesPayload) -> Result<UserPreference> {
        let mut conn = self.pool.get()?;
        let now = chrono::Utc::now().naive_utc();
        let sectors_json =
            serde_json::to_string(&payload.preferred_sectors).unwrap_or_else(|_| "[]".to_string());

        let existing = user_preferences::table
            .filter(user_preferences::email.eq(&payload.email))
            .first::<UserPreference>(&mut conn)
            .optional()?;

        let row = match existing {
            Some(prefs) => diesel::update(user_preferences::table.find(&prefs.id))
                .set((
                    user_preferences::notification_time.eq(&payload.notification_time),
                    user_preferences::risk_profile.eq(&payload.risk_profile),
                    user_preferences::preferred_sectors.eq(&sectors_json),
                    user_preferences::daily_summary_enabled.eq(payload.daily_summary_enabled),
                    user_preferences::updated_at.eq(now),
                ))
                .get_result::<UserPreference>(&mut conn)?,
            None => {
                let prefs = UserPreference {
                    id: uuid::Uuid::new_v4().to_string(),
                    email: payload.email,
                    notification_time: payload.notification_time,
                    risk_profile: payload.risk_profile,
                    preferred_sectors: sectors_json,
                    daily_summary_enabled: payload.daily_summary_enabled,
                    created_at: now,
                    updated_at: now,
                };
                diesel::insert_into(user_preferences::table)
                    .values(&prefs)
                    .get_result::<UserPreference>(&mut conn)?
            }
        };

        Ok(row)
    }
}
