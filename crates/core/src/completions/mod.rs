//! Completions module - domain models and repository trait.

mod completions_model;
mod completions_traits;

pub use completions_model::{Completion, CompletionUpdate, NewCompletion};
pub use completions_traits::CompletionRepositoryTrait;
