//! Streaks module - the completion toggle, streak counters, and badge issuance.

mod eligibility;
mod streaks_model;
mod streaks_service;
mod streaks_traits;


pub use eligibility::{
    can_complete_on, can_complete_today, days_until_available, WEEKLY_COOLDOWN_DAYS,
};
pub use streaks_model::{Eligibility, StreakCounters, ToggleOutcome};
pub use streaks_service::StreakService;
pub use streaks_traits::StreakServiceTrait;
