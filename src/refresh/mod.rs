//! Periodic refresh of allowances.
//!
//! This module is the integration layer around the pure engine: it turns
//! evaluations into named states and birthday notifications, forwards them to
//! pluggable sinks, and schedules refreshes at every local midnight.

mod schedule;
mod sink;
mod state;
mod tracker;

pub use schedule::{Clock, SystemClock, next_midnight_after, run_daily};
pub use sink::{JsonLinesSink, NotificationSink, StateSink, TracingSink};
pub use state::{AllowanceState, BirthdayNotification};
pub use tracker::{AllowanceTracker, RefreshSummary};
