use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;

use super::stats_model::{CalendarDay, CompletionCalendar, StatsOverview};
use super::stats_traits::StatsServiceTrait;
use crate::completions::{Completion, CompletionRepositoryTrait};
use crate::errors::Result;
use crate::goals::{Goal, GoalRepositoryTrait};
use crate::utils::time_utils::{days_in_month, week_bounds};

pub struct StatsService {
    goal_repository: Arc<dyn GoalRepositoryTrait>,
    completion_repository: Arc<dyn CompletionRepositoryTrait>,
}

impl StatsService {
    pub fn new(
        goal_repository: Arc<dyn GoalRepositoryTrait>,
        completion_repository: Arc<dyn CompletionRepositoryTrait>,
    ) -> Self {
        Self {
            goal_repository,
            completion_repository,
        }
    }

    /// Pure overview computation, shared by the service and its tests.
    pub fn compute_overview(
        goals: &[Goal],
        completions: &[Completion],
        today: NaiveDate,
    ) -> StatsOverview {
        let active: Vec<&Goal> = goals.iter().filter(|g| !g.is_archived).collect();
        let completed_today = completions.iter().filter(|c| c.date == today).count();
        let total_streak_days = active.iter().map(|g| u64::from(g.current_streak)).sum();

        let (week_start, week_end) = week_bounds(today);
        let week_completions = completions
            .iter()
            .filter(|c| c.date >= week_start && c.date <= week_end)
            .count();

        let weekly_progress = if active.is_empty() {
            0
        } else {
            let possible = (active.len() * 7) as f64;
            let pct = (week_completions as f64 / possible * 100.0).round();
            pct.min(100.0) as u32
        };

        StatsOverview {
            active_goals: active.len(),
            completed_today,
            total_streak_days,
            weekly_progress,
        }
    }
}

#[async_trait]
impl StatsServiceTrait for StatsService {
    async fn get_overview(&self, today: NaiveDate) -> Result<StatsOverview> {
        let (goals, completions) = tokio::try_join!(
            self.goal_repository.get_all(),
            self.completion_repository.get_all()
        )?;
        let overview = Self::compute_overview(&goals, &completions, today);
        debug!("Stats overview for {}: {:?}", today, overview);
        Ok(overview)
    }

    async fn get_calendar(
        &self,
        goal_id: i64,
        year: i32,
        month: u32,
    ) -> Result<CompletionCalendar> {
        let days = days_in_month(year, month)?;
        // Resolves NotFound for unknown goals before reading completions.
        self.goal_repository.get_by_id(goal_id).await?;
        let completed: HashSet<NaiveDate> = self
            .completion_repository
            .get_by_goal_id(goal_id)
            .await?
            .into_iter()
            .map(|c| c.date)
            .collect();

        let days: Vec<CalendarDay> = days
            .into_iter()
            .map(|date| CalendarDay {
                date,
                completed: completed.contains(&date),
            })
            .collect();
        let completed_days = days.iter().filter(|d| d.completed).count();

        Ok(CompletionCalendar {
            goal_id,
            year,
            month,
            days,
            completed_days,
        })
    }
}
