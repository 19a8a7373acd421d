//! Daily scrape-and-notify schedule.
//!
//! One background task owns all scheduled work: each iteration sleeps
//! until the next occurrence of the configured local wall-clock time, then
//! runs the pipeline (extract, replace the snapshot, mail the digest when
//! articles were found). Failures are logged and the schedule keeps
//! running; on-demand API refreshes go through the same state handle, so
//! there is no second writer path to race against.

use std::sync::Arc;

use chrono::{DateTime, Local, NaiveTime};
use tracing::{error, info};

use crate::mailer::Mailer;
use crate::scrapers::adrenaline;
use crate::server::AppState;

/// Spawn the daily pipeline task.
pub fn spawn_daily(state: Arc<AppState>, at: NaiveTime) {
    tokio::spawn(async move {
        info!(time = %at, "Daily digest schedule started");
        loop {
            let wait = duration_until(Local::now(), at);
            info!(minutes = wait.as_secs() / 60, "Sleeping until next scheduled run");
            tokio::time::sleep(wait).await;
            run_pipeline(&state).await;
        }
    });
}

/// Run one scheduled iteration: extract, store, notify.
pub async fn run_pipeline(state: &AppState) {
    info!("Running scheduled news refresh");

    let articles = match adrenaline::fetch_articles(&state.client, &state.news_url).await {
        Ok(articles) => articles,
        Err(e) => {
            error!(error = %e, "Scheduled refresh failed; keeping previous snapshot");
            return;
        }
    };

    let count = articles.len();
    state.news.replace(articles.clone()).await;

    if articles.is_empty() {
        info!("Listing page yielded no articles; skipping digest email");
        return;
    }

    let mailer = match Mailer::from_env() {
        Ok(mailer) => mailer,
        Err(e) => {
            error!(error = %e, "Mail configuration incomplete; digest not sent");
            return;
        }
    };

    match mailer.send_digest(&articles).await {
        Ok(()) => info!(count, "Scheduled digest sent"),
        Err(e) => error!(error = %e, "Digest delivery failed"),
    }
}

/// Time from `now` until the next occurrence of `at` on the local clock.
///
/// If `at` has already passed today (or is exactly now), the next
/// occurrence is tomorrow.
pub fn duration_until(now: DateTime<Local>, at: NaiveTime) -> std::time::Duration {
    let now_local = now.naive_local();
    let today = now_local.date().and_time(at);
    let next = if today > now_local {
        today
    } else {
        today + chrono::Duration::days(1)
    };
    (next - now_local).to_std().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn test_duration_until_later_today() {
        let now = Local.with_ymd_and_hms(2026, 8, 5, 9, 0, 0).unwrap();
        let wait = duration_until(now, at(12, 0, 0));
        assert_eq!(wait.as_secs(), 3 * 3600);
    }

    #[test]
    fn test_duration_until_rolls_over_to_tomorrow() {
        let now = Local.with_ymd_and_hms(2026, 8, 5, 13, 30, 0).unwrap();
        let wait = duration_until(now, at(12, 0, 0));
        assert_eq!(wait.as_secs(), 22 * 3600 + 1800);
    }

    #[test]
    fn test_duration_until_exactly_now_waits_a_full_day() {
        let now = Local.with_ymd_and_hms(2026, 8, 5, 12, 0, 0).unwrap();
        let wait = duration_until(now, at(12, 0, 0));
        assert_eq!(wait.as_secs(), 24 * 3600);
    }
}
