//! In-memory storage implementation for Streakboard.
//!
//! This crate implements the repository traits defined in `streakboard-core`
//! on top of a generic [`EntityStore`] that keeps records in process memory
//! and simulates I/O latency before every operation.
//!
//! ```text
//!        core (domain, engine)
//!                 │
//!                 ▼
//!   storage-memory (this crate)
//!        │        │        │
//!      goals  completions  badges
//!        └────────┼────────┘
//!                 ▼
//!          EntityStore<T>
//! ```

pub mod badges;
pub mod completions;
pub mod config;
pub mod goals;
pub mod latency;
pub mod seed;
pub mod storage;
pub mod store;

pub use badges::BadgeRepository;
pub use completions::CompletionRepository;
pub use config::StorageConfig;
pub use goals::GoalRepository;
pub use latency::{LatencyProfile, StoreOperation};
pub use seed::SeedData;
pub use storage::MemoryStorage;
pub use store::{EntityStore, StoredEntity};

// Re-export from streakboard-core for convenience
pub use streakboard_core::errors::{Error, Result, StorageError};
