//! Data Set Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases (import pipeline, version mapping)
//! - `infra/` - In-memory repository implementations
//!
//! ## Failure Model
//! Use cases return `Either<DataSetError, T>`: expected business
//! failures (not found, forbidden, rejected files, state conflicts)
//! travel as Left values and short-circuit the chain. Panics are
//! reserved for programmer errors.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

// Re-exports for convenience
pub use application::config::ImportConfig;
pub use error::{DataSetError, DataSetOutcome, DataSetResult};
pub use infra::memory::InMemoryDataSetStore;

// Re-export kernel vocabulary for unified error handling
pub use kernel::either::Either;
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[cfg(test)]
mod tests;
