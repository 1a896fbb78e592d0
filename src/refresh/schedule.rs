//! Daily refresh scheduling.
//!
//! Refreshes run once at startup and then at every local midnight. Before
//! each midnight refresh the configuration is reloaded from its source. After
//! each firing the next fire time is recomputed from the current clock, so
//! clock or timezone changes are picked up on the following cycle.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::info;

use crate::config::ConfigSource;

use super::sink::{NotificationSink, StateSink};
use super::tracker::AllowanceTracker;

/// Source of the current local date and time.
pub trait Clock {
    /// Returns the current local time.
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Returns the first midnight strictly after `now`.
///
/// # Example
///
/// ```
/// use allowance_engine::refresh::next_midnight_after;
/// use chrono::NaiveDateTime;
///
/// let now = NaiveDateTime::parse_from_str("2024-06-14 18:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let next = next_midnight_after(now);
/// assert_eq!(next.to_string(), "2024-06-15 00:00:00");
/// ```
pub fn next_midnight_after(now: NaiveDateTime) -> NaiveDateTime {
    now.date()
        .succ_opt()
        .unwrap_or(NaiveDate::MAX)
        .and_time(NaiveTime::MIN)
}

/// Runs the refresh loop forever.
///
/// Refreshes immediately, then sleeps until the next midnight reported by
/// `clock`, reloads the configuration from `source`, refreshes again and
/// re-arms. A failed reload keeps the last valid configuration.
pub async fn run_daily<C, R, S, N>(mut tracker: AllowanceTracker<S, N>, clock: C, source: R)
where
    C: Clock,
    R: ConfigSource,
    S: StateSink,
    N: NotificationSink,
{
    tracker.refresh(clock.now().date());

    loop {
        let now = clock.now();
        let next = next_midnight_after(now);
        let wait = (next - now).to_std().unwrap_or_default();
        info!(next_refresh = %next, "Scheduled next allowance refresh");

        tokio::time::sleep(wait).await;

        let today = clock.now().date();
        tracker.reload(&source, today);
        tracker.refresh(today);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f").unwrap()
    }

    #[test]
    fn test_next_midnight_from_evening() {
        assert_eq!(
            next_midnight_after(at("2024-06-14 18:30:00")),
            at("2024-06-15 00:00:00")
        );
    }

    #[test]
    fn test_next_midnight_from_exact_midnight_is_following_day() {
        assert_eq!(
            next_midnight_after(at("2024-06-15 00:00:00")),
            at("2024-06-16 00:00:00")
        );
    }

    #[test]
    fn test_next_midnight_just_before_midnight() {
        let now = at("2024-12-31 23:59:59.999");
        let next = next_midnight_after(now);
        assert_eq!(next, at("2025-01-01 00:00:00"));
        assert_eq!(next - now, Duration::milliseconds(1));
    }

    #[test]
    fn test_next_midnight_across_leap_day() {
        assert_eq!(
            next_midnight_after(at("2024-02-28 12:00:00")),
            at("2024-02-29 00:00:00")
        );
        assert_eq!(
            next_midnight_after(at("2024-02-29 12:00:00")),
            at("2024-03-01 00:00:00")
        );
    }

    #[test]
    fn test_next_midnight_is_always_in_the_future() {
        let mut now = at("2024-06-14 00:00:00");
        for _ in 0..200 {
            let next = next_midnight_after(now);
            assert!(next > now);
            assert!(next - now <= Duration::days(1));
            now += Duration::minutes(17);
        }
    }

    #[test]
    fn test_system_clock_reads_time() {
        let now = SystemClock.now();
        assert!(next_midnight_after(now) > now);
    }
}
