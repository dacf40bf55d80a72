use streakboard_core::events::{DomainEvent, DomainEventSink};

/// Sink that turns domain events into `tracing` records under the
/// `streakboard::events` target.
#[derive(Clone, Default)]
pub struct WebDomainEventSink;

impl WebDomainEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl DomainEventSink for WebDomainEventSink {
    fn emit(&self, event: DomainEvent) {
        match &event {
            DomainEvent::GoalCreated { goal_id } => {
                tracing::info!(target: "streakboard::events", goal_id, "goal created");
            }
            DomainEvent::GoalArchiveToggled {
                goal_id,
                is_archived,
            } => {
                tracing::info!(
                    target: "streakboard::events",
                    goal_id,
                    is_archived,
                    "goal archive toggled"
                );
            }
            DomainEvent::CompletionToggled {
                goal_id,
                date,
                completed,
                current_streak,
            } => {
                tracing::info!(
                    target: "streakboard::events",
                    goal_id,
                    %date,
                    completed,
                    current_streak,
                    "completion toggled"
                );
            }
            DomainEvent::BadgeEarned {
                badge_id,
                goal_id,
                badge_type,
            } => {
                tracing::info!(
                    target: "streakboard::events",
                    badge_id,
                    goal_id,
                    badge_type = badge_type.as_str(),
                    "badge earned"
                );
            }
        }
    }
}
