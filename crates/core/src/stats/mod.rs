//! Stats module - dashboard overview and per-goal completion calendar.

mod stats_model;
mod stats_service;
mod stats_traits;

pub use stats_model::{CalendarDay, CompletionCalendar, StatsOverview};
pub use stats_service::StatsService;
pub use stats_traits::StatsServiceTrait;
