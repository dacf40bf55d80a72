use async_trait::async_trait;
use chrono::NaiveDate;

use super::stats_model::{CompletionCalendar, StatsOverview};
use crate::errors::Result;

#[async_trait]
pub trait StatsServiceTrait: Send + Sync {
    /// Dashboard overview as of `today`.
    async fn get_overview(&self, today: NaiveDate) -> Result<StatsOverview>;

    /// Day-by-day completion calendar of a goal for one month.
    async fn get_calendar(&self, goal_id: i64, year: i32, month: u32)
        -> Result<CompletionCalendar>;
}
