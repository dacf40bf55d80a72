//! Streakboard Core - habit goals, streaks, and achievement badges.
//!
//! This crate contains the domain models, the streak engine, and the traits
//! storage backends implement. It holds no storage of its own; see the
//! `storage-memory` crate for the in-memory repositories.

pub mod badges;
pub mod completions;
pub mod errors;
pub mod events;
pub mod goals;
pub mod stats;
pub mod streaks;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
