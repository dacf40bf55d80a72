//! In-memory storage implementation for completions.

mod repository;

pub use repository::CompletionRepository;
