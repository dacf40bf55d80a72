use std::sync::{Arc, Mutex};

use super::DomainEvent;

/// Receiver for goal, completion and badge events.
///
/// The goal service and the streak engine call `emit` only after the
/// repository write succeeded, and the streak engine does so while it still
/// holds the goal's lock, so events for one goal arrive in write order.
/// `emit` has no error channel: a sink that cannot deliver drops the event
/// and the operation that produced it still succeeds.
pub trait DomainEventSink: Send + Sync {
    fn emit(&self, event: DomainEvent);
}

/// Sink for callers that don't observe events (CLI tools, property tests).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpDomainEventSink;

impl DomainEventSink for NoOpDomainEventSink {
    fn emit(&self, _event: DomainEvent) {}
}

/// Keeps every emitted event in memory, in emission order.
///
/// Clones share the same buffer, so a test can hand one clone to a service
/// and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingEventSink {
    recorded: Arc<Mutex<Vec<DomainEvent>>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DomainEvent> {
        match self.recorded.lock() {
            Ok(recorded) => recorded.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.events().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DomainEventSink for RecordingEventSink {
    fn emit(&self, event: DomainEvent) {
        match self.recorded.lock() {
            Ok(mut recorded) => recorded.push(event),
            Err(poisoned) => poisoned.into_inner().push(event),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::badges::BadgeType;

    #[test]
    fn test_recording_sink_keeps_emission_order() {
        let sink = RecordingEventSink::new();
        assert!(sink.is_empty());

        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        sink.emit(DomainEvent::completion_toggled(1, date, true, 7));
        sink.emit(DomainEvent::badge_earned(10, 1, BadgeType::Streak7));

        assert_eq!(
            sink.events(),
            vec![
                DomainEvent::completion_toggled(1, date, true, 7),
                DomainEvent::badge_earned(10, 1, BadgeType::Streak7),
            ]
        );
    }

    #[test]
    fn test_recording_sink_clones_share_buffer() {
        let sink = RecordingEventSink::new();
        let handle: Arc<dyn DomainEventSink> = Arc::new(sink.clone());

        handle.emit(DomainEvent::goal_created(3));
        handle.emit(DomainEvent::goal_archive_toggled(3, true));

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.events()[1], DomainEvent::goal_archive_toggled(3, true));
    }
}
