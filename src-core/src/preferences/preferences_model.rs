use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};
use crate::schema::user_preferences;

pub const RISK_PROFILES: [&str; 3] = ["conservative", "moderate", "aggressive"];

fn default_notification_time() -> String {
    "08:00".to_string()
}

fn default_risk_profile() -> String {
    "moderate".to_string()
}

fn default_enabled() -> bool {
    true
}

/// Stored preferences row. `preferred_sectors` holds a JSON array; the API
/// payload/response types convert at the boundary.
#[derive(Debug, Clone, Queryable, Identifiable, Insertable)]
#[diesel(table_name = user_preferences)]
pub struct UserPreference {
    pub id: String,
    pub email: String,
    pub notification_time: String,
    pub risk_profile: String,
    pub preferred_sectors: String,
    pub daily_summary_enabled: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl UserPreference {
    pub fn sectors(&self) -> Vec<String> {
        serde_json::from_str(&self.preferred_sectors).unwrap_or_default()
    }
}

/// API payload for the upsert endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesPayload {
    pub email: String,
    #[serde(default = "default_notification_time")]
    pub notification_time: String,
    #[serde(default = "default_risk_profile")]
    pub risk_profile: String,
    #[serde(default)]
    pub preferred_sectors: Vec<String>,
    #[serde(default = "default_enabled")]
    pub daily_summary_enabled: bool,
}

impl PreferencesPayload {
    pub fn validate(&self) -> Result<()> {
        if self.email.trim().is_empty() || !self.email.contains('@') {
            return Err(invalid("A valid email address is required"));
        }
        if !RISK_PROFILES.contains(&self.risk_profile.as_str()) {
            return Err(invalid(
                "Risk profile must be 'conservative', 'moderate' or 'aggressive'",
            ));
        }
        if parse_notification_time(&self.notification_time).is_none() {
            return Err(invalid("Notification time must be in HH:MM format"));
        }
        Ok(())
    }
}

/// API response shape, with sectors expanded back to an array.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesResponse {
    pub email: String,
    pub notification_time: String,
    pub risk_profile: String,
    pub preferred_sectors: Vec<String>,
    pub daily_summary_enabled: bool,
}

impl From<&UserPreference> for PreferencesResponse {
    fn from(prefs: &UserPreference) -> Self {
        PreferencesResponse {
            email: prefs.email.clone(),
            notification_time: prefs.notification_time.clone(),
            risk_profile: prefs.risk_profile.clone(),
            preferred_sectors: prefs.sectors(),
            daily_summary_enabled: prefs.daily_summary_enabled,
        }
    }
}

/// Parse an `HH:MM` wall-clock string.
pub fn parse_notification_time(value: &str) -> Option<chrono::NaiveTime> {
    chrono::NaiveTime::parse_from_str(value, "%H:%M").ok()
}

fn invalid(msg: &str) -> Error {
    Error::Validation(ValidationError::InvalidInput(msg.to_string()))
}
