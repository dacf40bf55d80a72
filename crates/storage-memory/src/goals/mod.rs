//! In-memory storage implementation for goals.

mod repository;

pub use repository::GoalRepository;
