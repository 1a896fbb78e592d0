//! Batch refresh of every configured child.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, info_span, warn};
use uuid::Uuid;

use crate::calculation::evaluate_children;
use crate::config::{AllowanceConfig, ConfigSource};

use super::sink::{NotificationSink, StateSink};
use super::state::{AllowanceState, BirthdayNotification};

/// Counts from one refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefreshSummary {
    /// Identifier attached to every log line of the refresh.
    pub correlation_id: Uuid,
    /// The as-of date of the refresh.
    pub date: NaiveDate,
    /// States published.
    pub published: usize,
    /// Children whose evaluation failed.
    pub failed: usize,
    /// Birthday notifications sent.
    pub notified: usize,
}

/// Evaluates all configured children and forwards the results to sinks.
///
/// The tracker remembers the last date each child was sent a birthday
/// notification, so repeated refreshes on the same day notify only once.
///
/// # Example
///
/// ```
/// use allowance_engine::config::AllowanceConfig;
/// use allowance_engine::models::ChildProfile;
/// use allowance_engine::refresh::{AllowanceState, AllowanceTracker, BirthdayNotification};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let child = ChildProfile {
///     name: "Alice".to_string(),
///     birthday: NaiveDate::from_ymd_opt(2015, 6, 15).unwrap(),
///     percentage: Decimal::new(30, 0),
/// };
/// let config = AllowanceConfig::new(vec![child], "USD");
/// let mut tracker = AllowanceTracker::new(
///     config,
///     Vec::<AllowanceState>::new(),
///     Vec::<BirthdayNotification>::new(),
/// );
///
/// let summary = tracker.refresh(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
/// assert_eq!(summary.published, 1);
/// assert_eq!(summary.notified, 1);
/// assert_eq!(tracker.states()[0].value, Decimal::new(270, 2));
/// ```
#[derive(Debug)]
pub struct AllowanceTracker<S, N> {
    config: AllowanceConfig,
    states: S,
    notifications: N,
    notified_on: HashMap<String, NaiveDate>,
}

impl<S, N> AllowanceTracker<S, N>
where
    S: StateSink,
    N: NotificationSink,
{
    /// Creates a tracker for `config` publishing to the given sinks.
    pub fn new(config: AllowanceConfig, states: S, notifications: N) -> Self {
        Self {
            config,
            states,
            notifications,
            notified_on: HashMap::new(),
        }
    }

    /// Evaluates every child on `today` and publishes the results.
    ///
    /// A child whose evaluation fails is logged and skipped; the others are
    /// still published.
    pub fn refresh(&mut self, today: NaiveDate) -> RefreshSummary {
        let correlation_id = Uuid::new_v4();
        let span = info_span!("refresh", correlation_id = %correlation_id, date = %today);
        let _enter = span.enter();

        info!(
            children = self.config.children().len(),
            "Refreshing allowances"
        );

        let mut summary = RefreshSummary {
            correlation_id,
            date: today,
            published: 0,
            failed: 0,
            notified: 0,
        };

        let currency = self.config.currency();
        for evaluation in evaluate_children(self.config.children(), currency, today) {
            let child = evaluation.child;
            let result = match evaluation.outcome {
                Ok(result) => result,
                Err(_) => {
                    summary.failed += 1;
                    continue;
                }
            };

            self.states
                .publish(&AllowanceState::new(child, currency, &result));
            summary.published += 1;

            if result.is_birthday_today && self.notified_on.get(&child.name) != Some(&today) {
                info!(child = %child.name, age = result.age, "Birthday today");
                self.notifications
                    .notify(&BirthdayNotification::new(child, &result));
                self.notified_on.insert(child.name.clone(), today);
                summary.notified += 1;
            }
        }

        info!(
            published = summary.published,
            failed = summary.failed,
            notified = summary.notified,
            "Allowance refresh complete"
        );

        summary
    }

    /// Replaces the configuration used by later refreshes.
    pub fn set_config(&mut self, config: AllowanceConfig) {
        self.config = config;
    }

    /// Reloads the configuration from `source`.
    ///
    /// On failure the last valid configuration is kept and `false` is
    /// returned.
    pub fn reload<C: ConfigSource + ?Sized>(&mut self, source: &C, today: NaiveDate) -> bool {
        match source.load(today) {
            Ok(config) => {
                info!(
                    children = config.children().len(),
                    currency = %config.currency(),
                    "Reloaded allowance configuration"
                );
                self.set_config(config);
                true
            }
            Err(e) => {
                warn!(error = %e, "Configuration reload failed, keeping previous configuration");
                false
            }
        }
    }

    /// Returns the configuration being tracked.
    pub fn config(&self) -> &AllowanceConfig {
        &self.config
    }

    /// Returns the state sink.
    pub fn states(&self) -> &S {
        &self.states
    }

    /// Returns the notification sink.
    pub fn notifications(&self) -> &N {
        &self.notifications
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EngineError, EngineResult};
    use crate::models::ChildProfile;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    type TestTracker = AllowanceTracker<Vec<AllowanceState>, Vec<BirthdayNotification>>;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn child(name: &str, birthday: NaiveDate, percentage: &str) -> ChildProfile {
        ChildProfile {
            name: name.to_string(),
            birthday,
            percentage: Decimal::from_str(percentage).unwrap(),
        }
    }

    fn tracker(children: Vec<ChildProfile>, currency: &str) -> TestTracker {
        AllowanceTracker::new(
            AllowanceConfig::new(children, currency),
            Vec::new(),
            Vec::new(),
        )
    }

    #[test]
    fn test_refresh_publishes_one_state_per_child() {
        let mut tracker = tracker(
            vec![
                child("Alice", date(2015, 6, 15), "30"),
                child("Bob", date(2020, 1, 1), "50"),
            ],
            "EUR",
        );

        let summary = tracker.refresh(date(2024, 6, 1));

        assert_eq!(summary.published, 2);
        assert_eq!(summary.failed, 0);
        assert_eq!(summary.notified, 0);
        assert_eq!(summary.date, date(2024, 6, 1));

        let states = tracker.states();
        assert_eq!(states[0].entity_id, "sensor.alice_allowance");
        assert_eq!(states[0].value, Decimal::from_str("2.40").unwrap());
        assert_eq!(states[1].entity_id, "sensor.bob_allowance");
        assert_eq!(states[1].value, Decimal::ZERO);
        assert!(tracker.notifications().is_empty());
    }

    #[test]
    fn test_refresh_isolates_failing_child() {
        let mut tracker = tracker(
            vec![
                child("Alice", date(2015, 6, 15), "30"),
                child("Ghost", date(2030, 1, 1), "30"),
                child("Carl", date(2010, 3, 1), "30"),
            ],
            "SEK",
        );

        let summary = tracker.refresh(date(2024, 2, 28));

        assert_eq!(summary.published, 2);
        assert_eq!(summary.failed, 1);
        let ids: Vec<&str> = tracker
            .states()
            .iter()
            .map(|s| s.entity_id.as_str())
            .collect();
        assert_eq!(ids, vec!["sensor.alice_allowance", "sensor.carl_allowance"]);
        assert_eq!(tracker.states()[1].attributes["formatted_value"], "3.90 kr");
    }

    #[test]
    fn test_birthday_notifies_once_per_day() {
        let mut tracker = tracker(vec![child("Alice", date(2015, 6, 15), "30")], "USD");

        let first = tracker.refresh(date(2024, 6, 15));
        let second = tracker.refresh(date(2024, 6, 15));

        assert_eq!(first.notified, 1);
        assert_eq!(second.notified, 0);
        assert_eq!(second.published, 1);
        assert_eq!(tracker.notifications().len(), 1);
        assert_eq!(
            tracker.notifications()[0].message,
            "It's Alice's birthday! New weekly allowance: $2.70"
        );
    }

    #[test]
    fn test_birthday_notifies_again_next_year() {
        let mut tracker = tracker(vec![child("Alice", date(2015, 6, 15), "30")], "USD");

        tracker.refresh(date(2024, 6, 15));
        tracker.refresh(date(2024, 6, 16));
        tracker.refresh(date(2025, 6, 15));

        let messages: Vec<&str> = tracker
            .notifications()
            .iter()
            .map(|n| n.message.as_str())
            .collect();
        assert_eq!(
            messages,
            vec![
                "It's Alice's birthday! New weekly allowance: $2.70",
                "It's Alice's birthday! New weekly allowance: $3.00",
            ]
        );
    }

    struct FixedSource(AllowanceConfig);

    impl ConfigSource for FixedSource {
        fn load(&self, _today: NaiveDate) -> EngineResult<AllowanceConfig> {
            Ok(self.0.clone())
        }
    }

    struct BrokenSource;

    impl ConfigSource for BrokenSource {
        fn load(&self, _today: NaiveDate) -> EngineResult<AllowanceConfig> {
            Err(EngineError::ConfigParseError {
                path: "allowance.yaml".to_string(),
                message: "invalid YAML".to_string(),
            })
        }
    }

    #[test]
    fn test_refresh_after_config_swap_uses_new_currency() {
        let alice = child("Alice", date(2015, 6, 15), "30");
        let mut tracker = tracker(vec![alice.clone()], "USD");

        tracker.refresh(date(2024, 6, 1));
        tracker.set_config(AllowanceConfig::new(vec![alice], "SEK"));
        tracker.refresh(date(2024, 6, 2));

        let states = tracker.states();
        assert_eq!(states[0].unit, "USD");
        assert_eq!(states[0].attributes["formatted_value"], "$2.40");
        assert_eq!(states[1].unit, "SEK");
        assert_eq!(states[1].attributes["formatted_value"], "2.40 kr");
    }

    #[test]
    fn test_reload_replaces_config() {
        let mut tracker = tracker(vec![child("Alice", date(2015, 6, 15), "30")], "USD");
        let source = FixedSource(AllowanceConfig::new(
            vec![
                child("Alice", date(2015, 6, 15), "30"),
                child("Bob", date(2010, 1, 1), "50"),
            ],
            "GBP",
        ));

        assert!(tracker.reload(&source, date(2024, 6, 1)));
        let summary = tracker.refresh(date(2024, 6, 1));

        assert_eq!(summary.published, 2);
        assert_eq!(tracker.config().currency(), "GBP");
        assert_eq!(tracker.states()[1].attributes["formatted_value"], "£7.00");
    }

    #[test]
    fn test_failed_reload_keeps_last_valid_config() {
        let mut tracker = tracker(vec![child("Alice", date(2015, 6, 15), "30")], "USD");

        assert!(!tracker.reload(&BrokenSource, date(2024, 6, 1)));
        tracker.refresh(date(2024, 6, 1));

        assert_eq!(tracker.config().currency(), "USD");
        assert_eq!(tracker.states()[0].unit, "USD");
    }

    #[test]
    fn test_each_refresh_has_new_correlation_id() {
        let mut tracker = tracker(vec![], "EUR");
        let a = tracker.refresh(date(2024, 6, 1));
        let b = tracker.refresh(date(2024, 6, 1));
        assert_ne!(a.correlation_id, b.correlation_id);
        assert_eq!(a.published, 0);
    }
}
