//! Destinations for refreshed states and birthday notifications.

use std::io::Write;

use tracing::{info, warn};

use super::state::{AllowanceState, BirthdayNotification};

/// Receives one named state per child per refresh.
pub trait StateSink {
    /// Publishes a child's current state.
    fn publish(&mut self, state: &AllowanceState);
}

/// Receives birthday notifications.
pub trait NotificationSink {
    /// Delivers a notification.
    fn notify(&mut self, notification: &BirthdayNotification);
}

/// Collects states in memory.
impl StateSink for Vec<AllowanceState> {
    fn publish(&mut self, state: &AllowanceState) {
        self.push(state.clone());
    }
}

/// Collects notifications in memory.
impl NotificationSink for Vec<BirthdayNotification> {
    fn notify(&mut self, notification: &BirthdayNotification) {
        self.push(notification.clone());
    }
}

/// Emits states and notifications as `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl StateSink for TracingSink {
    fn publish(&mut self, state: &AllowanceState) {
        info!(
            entity_id = %state.entity_id,
            value = %state.value,
            unit = %state.unit,
            attributes = %state.attributes,
            "Allowance state"
        );
    }
}

impl NotificationSink for TracingSink {
    fn notify(&mut self, notification: &BirthdayNotification) {
        info!(
            child = %notification.child,
            title = %notification.title,
            "{}",
            notification.message
        );
    }
}

/// Writes each state as one line of JSON.
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    /// Creates a sink writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_state(&mut self, state: &AllowanceState) -> std::io::Result<()> {
        serde_json::to_writer(&mut self.writer, state)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }
}

impl<W: Write> StateSink for JsonLinesSink<W> {
    fn publish(&mut self, state: &AllowanceState) {
        if let Err(err) = self.write_state(state) {
            warn!(entity_id = %state.entity_id, error = %err, "Failed to write allowance state");
        }
    }
}
