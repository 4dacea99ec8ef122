//! MovieStore trait definition.
//!
//! Abstracts record storage behind an object-safe trait so the server and
//! the tests share one surface. The only shipped backend is in-memory;
//! a durable backend would slot in here.

use super::models::{Movie, MovieRecord};
use thiserror::Error;
use uuid::Uuid;

/// Storage failure for id-addressed operations.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum StoreError {
    #[error("no movie with id '{0}'")]
    NotFound(Uuid),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Trait for movie storage backends.
pub trait MovieStore: Send + Sync {
    /// Insert a validated record under a fresh id; returns the stored movie.
    fn create(&self, record: MovieRecord) -> Movie;

    /// All stored movies. Order is unspecified; callers must not depend
    /// on it.
    fn list(&self) -> Vec<Movie>;

    /// Get a movie by id.
    fn get(&self, id: &Uuid) -> StoreResult<Movie>;

    /// Overwrite every field of an existing movie with the new record,
    /// keeping its id.
    fn replace(&self, id: &Uuid, record: MovieRecord) -> StoreResult<Movie>;

    /// Remove a movie by id.
    fn delete(&self, id: &Uuid) -> StoreResult<()>;

    /// Number of stored movies (for metrics).
    fn count(&self) -> usize;
}
