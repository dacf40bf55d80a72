use log::{debug, info};
use std::sync::Arc;

use super::goals_model::{Goal, GoalUpdate, NewGoal};
use super::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::errors::{Error, Result, ValidationError};
use crate::events::{DomainEvent, DomainEventSink};
use async_trait::async_trait;

/// Service for managing goal lifecycle: creation, edits, archival.
pub struct GoalService {
    goal_repository: Arc<dyn GoalRepositoryTrait>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl GoalService {
    pub fn new(
        goal_repository: Arc<dyn GoalRepositoryTrait>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        GoalService {
            goal_repository,
            event_sink,
        }
    }

    /// Trims the title and rejects a blank one. Streak counters belong to
    /// the streak engine and are refused here.
    fn validate_update(goal_id: i64, goal_update: GoalUpdate) -> Result<GoalUpdate> {
        if goal_update.touches_streak() {
            return Err(Error::ConstraintViolation(format!(
                "Streak counters of goal {goal_id} can only change through completions"
            )));
        }
        let mut patch = goal_update;
        if let Some(title) = patch.title.as_ref() {
            let trimmed = title.trim();
            if trimmed.is_empty() {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Goal title cannot be empty".to_string(),
                )));
            }
            patch.title = Some(trimmed.to_string());
        }
        Ok(patch)
    }
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    async fn get_goals(&self) -> Result<Vec<Goal>> {
        self.goal_repository.get_all().await
    }

    async fn get_goal(&self, goal_id: i64) -> Result<Goal> {
        self.goal_repository.get_by_id(goal_id).await
    }

    async fn list_goals(&self, archived: bool) -> Result<Vec<Goal>> {
        let goals = self.goal_repository.get_all().await?;
        Ok(goals
            .into_iter()
            .filter(|g| g.is_archived == archived)
            .collect())
    }

    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        let new_goal = new_goal.normalized()?;
        debug!("Creating goal '{}' ({:?})", new_goal.title, new_goal.frequency);
        let goal = self.goal_repository.create(new_goal).await?;
        self.event_sink.emit(DomainEvent::goal_created(goal.id));
        Ok(goal)
    }

    async fn update_goal(&self, goal_id: i64, goal_update: GoalUpdate) -> Result<Goal> {
        let patch = Self::validate_update(goal_id, goal_update)?;
        debug!("Updating goal {}", goal_id);
        self.goal_repository.update(goal_id, patch).await
    }

    async fn toggle_archive(&self, goal_id: i64) -> Result<Goal> {
        let goal = self.goal_repository.get_by_id(goal_id).await?;
        let updated = self
            .goal_repository
            .update(goal_id, GoalUpdate::archived(!goal.is_archived))
            .await?;
        info!(
            "Goal {} {}",
            goal_id,
            if updated.is_archived { "archived" } else { "restored" }
        );
        self.event_sink.emit(DomainEvent::goal_archive_toggled(
            goal_id,
            updated.is_archived,
        ));
        Ok(updated)
    }

    async fn delete_goal(&self, goal_id: i64) -> Result<Goal> {
        self.goal_repository.delete(goal_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::RecordingEventSink;
    use crate::goals::Frequency;
    use chrono::{NaiveDate, Utc};
    use std::sync::RwLock;

    // ============== Mock Repository ==============

    #[derive(Default)]
    struct MockGoalRepository {
        goals: RwLock<Vec<Goal>>,
    }

    impl MockGoalRepository {
        fn with_goals(goals: Vec<Goal>) -> Self {
            Self {
                goals: RwLock::new(goals),
            }
        }
    }

    #[async_trait]
    impl GoalRepositoryTrait for MockGoalRepository {
        async fn get_all(&self) -> Result<Vec<Goal>> {
            Ok(self.goals.read().unwrap().clone())
        }

        async fn get_by_id(&self, goal_id: i64) -> Result<Goal> {
            self.goals
                .read()
                .unwrap()
                .iter()
                .find(|g| g.id == goal_id)
                .cloned()
                .ok_or_else(|| Error::not_found("Goal", goal_id))
        }

        async fn create(&self, new_goal: NewGoal) -> Result<Goal> {
            let mut goals = self.goals.write().unwrap();
            let id = goals.iter().map(|g| g.id).max().unwrap_or(0) + 1;
            let goal = Goal::from_new(id, new_goal, Utc::now());
            goals.push(goal.clone());
            Ok(goal)
        }

        async fn update(&self, goal_id: i64, goal_update: GoalUpdate) -> Result<Goal> {
            let mut goals = self.goals.write().unwrap();
            let goal = goals
                .iter_mut()
                .find(|g| g.id == goal_id)
                .ok_or_else(|| Error::not_found("Goal", goal_id))?;
            goal.apply(goal_update);
            Ok(goal.clone())
        }

        async fn delete(&self, goal_id: i64) -> Result<Goal> {
            let mut goals = self.goals.write().unwrap();
            let index = goals
                .iter()
                .position(|g| g.id == goal_id)
                .ok_or_else(|| Error::not_found("Goal", goal_id))?;
            Ok(goals.remove(index))
        }
    }

    fn goal(id: i64, is_archived: bool, current: u32, best: u32) -> Goal {
        Goal {
            id,
            title: format!("Goal {id}"),
            description: None,
            frequency: Frequency::Daily,
            created_at: Utc::now(),
            is_archived,
            current_streak: current,
            best_streak: best,
            last_completed_date: NaiveDate::from_ymd_opt(2024, 1, 1),
        }
    }

    fn service(goals: Vec<Goal>) -> (GoalService, RecordingEventSink) {
        let sink = RecordingEventSink::new();
        let service = GoalService::new(
            Arc::new(MockGoalRepository::with_goals(goals)),
            Arc::new(sink.clone()),
        );
        (service, sink)
    }

    #[tokio::test]
    async fn test_create_goal_trims_and_applies_defaults() {
        let (service, sink) = service(vec![]);
        let mut new_goal = NewGoal::new("  Read 20 pages  ", Frequency::Weekly);
        new_goal.description = Some("   ".to_string());

        let created = service.create_goal(new_goal).await.unwrap();

        assert_eq!(created.title, "Read 20 pages");
        assert_eq!(created.description, None);
        assert_eq!(created.frequency, Frequency::Weekly);
        assert!(!created.is_archived);
        assert_eq!(created.current_streak, 0);
        assert_eq!(created.best_streak, 0);
        assert_eq!(created.last_completed_date, None);
        assert_eq!(sink.len(), 1);
    }

    #[tokio::test]
    async fn test_create_goal_rejects_blank_title() {
        let (service, sink) = service(vec![]);
        let result = service
            .create_goal(NewGoal::new("   ", Frequency::Daily))
            .await;

        assert!(matches!(result, Err(Error::Validation(_))));
        assert!(service.get_goals().await.unwrap().is_empty());
        assert!(sink.is_empty());
    }

    #[tokio::test]
    async fn test_list_goals_filters_by_archive_state() {
        let (service, _) = service(vec![
            goal(1, false, 0, 0),
            goal(2, true, 0, 0),
            goal(3, false, 0, 0),
        ]);

        let active: Vec<i64> = service
            .list_goals(false)
            .await
            .unwrap()
            .iter()
            .map(|g| g.id)
            .collect();
        let archived: Vec<i64> = service
            .list_goals(true)
            .await
            .unwrap()
            .iter()
            .map(|g| g.id)
            .collect();

        assert_eq!(active, vec![1, 3]);
        assert_eq!(archived, vec![2]);
    }

    #[tokio::test]
    async fn test_toggle_archive_preserves_counters() {
        let (service, sink) = service(vec![goal(1, false, 4, 9)]);

        let archived = service.toggle_archive(1).await.unwrap();
        assert!(archived.is_archived);
        assert_eq!(archived.current_streak, 4);
        assert_eq!(archived.best_streak, 9);

        let restored = service.toggle_archive(1).await.unwrap();
        assert!(!restored.is_archived);
        assert_eq!(restored.current_streak, 4);
        assert_eq!(sink.len(), 2);
    }

    #[tokio::test]
    async fn test_toggle_archive_unknown_goal() {
        let (service, _) = service(vec![]);
        let err = service.toggle_archive(99).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_update_goal_refuses_streak_counters() {
        let (service, _) = service(vec![goal(1, false, 3, 5)]);

        let result = service
            .update_goal(1, GoalUpdate::streak(8, 5, NaiveDate::from_ymd_opt(2024, 1, 2)))
            .await;
        assert!(matches!(result, Err(Error::ConstraintViolation(_))));

        let unchanged = service.get_goal(1).await.unwrap();
        assert_eq!(unchanged.current_streak, 3);
        assert_eq!(unchanged.best_streak, 5);
    }

    #[tokio::test]
    async fn test_update_goal_unknown_goal() {
        let (service, _) = service(vec![]);
        let err = service
            .update_goal(7, GoalUpdate::retitled("Swim"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_update_goal_preserves_unmentioned_fields() {
        let (service, _) = service(vec![goal(1, false, 3, 5)]);

        let updated = service
            .update_goal(
                1,
                GoalUpdate {
                    title: Some("  Meditate ".to_string()),
                    description: Some(Some("10 minutes".to_string())),
                    ..GoalUpdate::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "Meditate");
        assert_eq!(updated.description.as_deref(), Some("10 minutes"));
        assert_eq!(updated.current_streak, 3);
        assert_eq!(updated.best_streak, 5);
        assert_eq!(updated.last_completed_date, NaiveDate::from_ymd_opt(2024, 1, 1));
    }

    #[tokio::test]
    async fn test_update_goal_rejects_blank_title() {
        let (service, _) = service(vec![goal(1, false, 0, 0)]);
        let result = service
            .update_goal(
                1,
                GoalUpdate {
                    title: Some(" ".to_string()),
                    ..GoalUpdate::default()
                },
            )
            .await;
        assert!(matches!(result, Err(Error::Validation(_))));
    }
}
