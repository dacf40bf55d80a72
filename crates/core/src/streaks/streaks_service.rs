use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::DashMap;
use log::{debug, error, info, warn};
use tokio::sync::{Mutex, OwnedMutexGuard};

use super::eligibility::{can_complete_on, can_complete_today, days_until_available};
use super::streaks_model::{Eligibility, StreakCounters, ToggleOutcome};
use super::streaks_traits::StreakServiceTrait;
use crate::badges::{badges_for_streak, Badge, BadgeRepositoryTrait, BadgeType, NewBadge};
use crate::completions::{Completion, CompletionRepositoryTrait, NewCompletion};
use crate::errors::{Error, Result};
use crate::events::{DomainEvent, DomainEventSink};
use crate::goals::{Goal, GoalRepositoryTrait, GoalUpdate};
use crate::utils::time_utils::completion_date_today;

/// The Streak & Achievement Engine.
///
/// Every toggle runs under a per-goal async mutex held from the first read
/// to the last write, so two toggles of the same goal never both observe
/// "no completion for this date". Toggles of different goals interleave
/// freely.
pub struct StreakService {
    goal_repository: Arc<dyn GoalRepositoryTrait>,
    completion_repository: Arc<dyn CompletionRepositoryTrait>,
    badge_repository: Arc<dyn BadgeRepositoryTrait>,
    event_sink: Arc<dyn DomainEventSink>,
    goal_locks: DashMap<i64, Arc<Mutex<()>>>,
}

impl StreakService {
    pub fn new(
        goal_repository: Arc<dyn GoalRepositoryTrait>,
        completion_repository: Arc<dyn CompletionRepositoryTrait>,
        badge_repository: Arc<dyn BadgeRepositoryTrait>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        Self {
            goal_repository,
            completion_repository,
            badge_repository,
            event_sink,
            goal_locks: DashMap::new(),
        }
    }

    /// Acquires the lock for `goal_id`, creating its entry on first use.
    async fn lock_goal(&self, goal_id: i64) -> GoalLockGuard<'_> {
        let lock = self.goal_locks.entry(goal_id).or_default().clone();
        GoalLockGuard {
            goal_id,
            locks: &self.goal_locks,
            guard: Some(lock.lock_owned().await),
        }
    }

    /// Number of goals with a live lock entry.
    pub(crate) fn tracked_goal_locks(&self) -> usize {
        self.goal_locks.len()
    }

    async fn find_completion(&self, goal_id: i64, date: NaiveDate) -> Result<Option<Completion>> {
        let completions = self.completion_repository.get_by_goal_id(goal_id).await?;
        Ok(completions.into_iter().find(|c| c.matches(goal_id, date)))
    }

    /// Toggles on behalf of the goal list, enforcing archival and eligibility.
    pub async fn toggle_gated(&self, goal_id: i64, today: NaiveDate) -> Result<ToggleOutcome> {
        let _guard = self.lock_goal(goal_id).await;

        let goal = self.goal_repository.get_by_id(goal_id).await?;
        if goal.is_archived {
            return Err(Error::ConstraintViolation(format!(
                "Goal {goal_id} is archived"
            )));
        }
        let existing = self.find_completion(goal_id, today).await?;
        match existing {
            Some(completion) => self.uncomplete(goal, completion).await,
            None if can_complete_on(&goal, today) => self.complete(goal, today).await,
            None => Err(Error::ConstraintViolation(format!(
                "Goal {goal_id} cannot be completed again for {} more day(s)",
                days_until_available(&goal, today)
            ))),
        }
    }

    /// Eligibility of `goal_id` as of `today`.
    pub async fn eligibility_on(&self, goal_id: i64, today: NaiveDate) -> Result<Eligibility> {
        let goal = self.goal_repository.get_by_id(goal_id).await?;
        let completed_today = self.find_completion(goal_id, today).await?.is_some();
        Ok(Eligibility {
            can_complete_today: can_complete_on(&goal, today),
            completed_today,
            days_until_available: days_until_available(&goal, today),
        })
    }

    async fn uncomplete(&self, goal: Goal, existing: Completion) -> Result<ToggleOutcome> {
        let removed = self.completion_repository.delete(existing.id).await?;
        let counters = StreakCounters::of(&goal).uncompleted();

        let updated_goal = match self.persist_counters(goal.id, counters).await {
            Ok(updated) => updated,
            Err(e) => {
                let restore = NewCompletion {
                    goal_id: removed.goal_id,
                    date: removed.date,
                    completed_at: Some(removed.completed_at),
                };
                if let Err(restore_err) = self.completion_repository.create(restore).await {
                    error!(
                        "Failed to restore completion for goal {} on {} after goal update error: {}",
                        goal.id, removed.date, restore_err
                    );
                }
                return Err(e);
            }
        };

        info!(
            "Goal {} un-completed for {}: streak {} -> {}",
            goal.id, removed.date, goal.current_streak, updated_goal.current_streak
        );
        self.event_sink.emit(DomainEvent::completion_toggled(
            goal.id,
            removed.date,
            false,
            updated_goal.current_streak,
        ));

        Ok(ToggleOutcome {
            goal: updated_goal,
            completion_added: false,
            completion: removed,
            new_badges: Vec::new(),
            failed_badges: Vec::new(),
        })
    }

    async fn complete(&self, goal: Goal, date: NaiveDate) -> Result<ToggleOutcome> {
        let created = self
            .completion_repository
            .create(NewCompletion::new(goal.id, date))
            .await?;
        let counters = StreakCounters::of(&goal).completed(date);

        let updated_goal = match self.persist_counters(goal.id, counters).await {
            Ok(updated) => updated,
            Err(e) => {
                if let Err(rollback_err) = self.completion_repository.delete(created.id).await {
                    error!(
                        "Failed to roll back completion {} for goal {} after goal update error: {}",
                        created.id, goal.id, rollback_err
                    );
                }
                return Err(e);
            }
        };

        info!(
            "Goal {} completed for {}: streak {} -> {} (best {})",
            goal.id, date, goal.current_streak, updated_goal.current_streak, updated_goal.best_streak
        );
        self.event_sink.emit(DomainEvent::completion_toggled(
            goal.id,
            date,
            true,
            updated_goal.current_streak,
        ));

        let (new_badges, failed_badges) = self
            .issue_badges(goal.id, updated_goal.current_streak)
            .await;

        Ok(ToggleOutcome {
            goal: updated_goal,
            completion_added: true,
            completion: created,
            new_badges,
            failed_badges,
        })
    }

    async fn persist_counters(&self, goal_id: i64, counters: StreakCounters) -> Result<Goal> {
        self.goal_repository
            .update(
                goal_id,
                GoalUpdate::streak(counters.current, counters.best, counters.last_completed_date),
            )
            .await
    }

    /// Issues one badge per milestone reached. Failures are logged and
    /// reported, never propagated.
    async fn issue_badges(&self, goal_id: i64, streak: u32) -> (Vec<Badge>, Vec<BadgeType>) {
        let mut issued = Vec::new();
        let mut failed = Vec::new();
        for badge_type in badges_for_streak(streak) {
            match self
                .badge_repository
                .create(NewBadge::new(badge_type, goal_id))
                .await
            {
                Ok(badge) => {
                    info!(
                        "Goal {} earned badge {} at streak {}",
                        goal_id,
                        badge_type.as_str(),
                        streak
                    );
                    self.event_sink
                        .emit(DomainEvent::badge_earned(badge.id, goal_id, badge_type));
                    issued.push(badge);
                }
                Err(e) => {
                    warn!(
                        "Failed to issue badge {} for goal {}: {}",
                        badge_type.as_str(),
                        goal_id,
                        e
                    );
                    failed.push(badge_type);
                }
            }
        }
        (issued, failed)
    }
}

/// Holds a goal's lock. On release the map entry is dropped unless another
/// toggle is already waiting on it.
struct GoalLockGuard<'a> {
    goal_id: i64,
    locks: &'a DashMap<i64, Arc<Mutex<()>>>,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for GoalLockGuard<'_> {
    fn drop(&mut self) {
        self.guard.take();
        self.locks
            .remove_if(&self.goal_id, |_, lock| Arc::strong_count(lock) == 1);
    }
}

#[async_trait]
impl StreakServiceTrait for StreakService {
    async fn toggle_completion(
        &self,
        goal_id: i64,
        date: Option<NaiveDate>,
    ) -> Result<ToggleOutcome> {
        let date = date.unwrap_or_else(completion_date_today);
        let _guard = self.lock_goal(goal_id).await;

        debug!("Toggling completion of goal {} on {}", goal_id, date);
        let goal = self.goal_repository.get_by_id(goal_id).await?;
        match self.find_completion(goal_id, date).await? {
            Some(existing) => self.uncomplete(goal, existing).await,
            None => self.complete(goal, date).await,
        }
    }

    async fn toggle_today(&self, goal_id: i64) -> Result<ToggleOutcome> {
        self.toggle_gated(goal_id, completion_date_today()).await
    }

    async fn is_completed_on(&self, goal_id: i64, date: NaiveDate) -> Result<bool> {
        Ok(self.find_completion(goal_id, date).await?.is_some())
    }

    async fn get_eligibility(&self, goal_id: i64) -> Result<Eligibility> {
        self.eligibility_on(goal_id, completion_date_today()).await
    }

    fn can_complete_today(&self, goal: &Goal) -> bool {
        can_complete_today(goal)
    }
}
