//! Wall-clock math for the daily summary tick.

use chrono::{Duration as ChronoDuration, NaiveDateTime, NaiveTime};

/// Seconds until the next occurrence of `at`, rolling to tomorrow when the
/// time has already passed today. Never returns 0; a tick exactly on the
/// boundary waits a full day.
pub fn seconds_until_next_run(now: NaiveDateTime, at: NaiveTime) -> u64 {
    let today_run = now.date().and_time(at);
    let next_run = if today_run > now {
        today_run
    } else {
        today_run + ChronoDuration::days(1)
    };

    (next_run - now).num_seconds().max(1) as u64
}
