//! Daily summary loop. Sleeps until the configured wall-clock time, sends
//! a summary to every enabled recipient, and goes back to sleep. Failures
//! are logged and never retried.

use std::sync::Arc;
use std::time::Duration;

use advisor_core::preferences::PreferencesServiceTrait;
use advisor_core::summary::{format_summary_email, seconds_until_next_run};

use crate::main_lib::AppState;

pub fn spawn_daily_summary(state: Arc<AppState>) {
    tokio::spawn(async move {
        loop {
            let now = chrono::Local::now().naive_local();
            let wait = seconds_until_next_run(now, state.summary_time);
            tracing::info!(seconds = wait, "next daily summary scheduled");
            tokio::time::sleep(Duration::from_secs(wait)).await;

            run_daily_summaries(&state).await;
        }
    });
}

pub async fn run_daily_summaries(state: &AppState) {
    let sender = match &state.email_sender {
        Some(sender) => sender,
        None => {
            tracing::warn!("daily summary skipped: SMTP transport not configured");
            return;
        }
    };

    let recipients = match state.preferences_service.summary_recipients() {
        Ok(recipients) => recipients,
        Err(e) => {
            tracing::error!("daily summary aborted, could not load recipients: {}", e);
            return;
        }
    };

    tracing::info!(count = recipients.len(), "sending daily summaries");

    for prefs in recipients {
        let summary = match state.summary_service.generate(&prefs).await {
            Ok(summary) => summary,
            Err(e) => {
                tracing::error!("summary generation failed for {}: {}", prefs.email, e);
                continue;
            }
        };

        let body = format_summary_email(&summary);
        if let Err(e) = sender
            .send_html(&prefs.email, "Your Daily Portfolio Summary", body)
            .await
        {
            tracing::error!("summary delivery failed for {}: {}", prefs.email, e);
        }
    }
}
