//! In-memory storage implementation for badges.

mod repository;

pub use repository::BadgeRepository;
