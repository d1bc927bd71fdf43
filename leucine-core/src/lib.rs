//! Shared primitives and traits for the Team Leucine sequence tools.
//!
//! `leucine-core` is the foundation the other workspace crates build on:
//!
//! - **Error types** — [`LeucineError`] and [`Result`] for structured error handling
//! - **Traits** — [`Sequence`], [`Annotated`], [`Summarizable`]

pub mod error;
pub mod traits;

pub use error::{LeucineError, Result};
pub use traits::*;
