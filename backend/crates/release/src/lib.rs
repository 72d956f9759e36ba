//! Release Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases (viewing, approval, publishing)
//! - `infra/` - In-memory repository implementations
//!
//! ## Failure Model
//! Use cases return `Either<ReleaseError, T>`: expected business
//! failures (not found, forbidden, illegal transitions) travel as Left
//! values and short-circuit the chain. Panics are reserved for
//! programmer errors.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

// Re-exports for convenience
pub use application::config::ReleaseConfig;
pub use error::{ReleaseError, ReleaseOutcome, ReleaseResult};
pub use infra::memory::InMemoryReleaseStore;

// Re-export kernel vocabulary for unified error handling
pub use kernel::either::Either;
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
