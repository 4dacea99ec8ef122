//! Movie Catalog Server Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod config;
pub mod movie_store;
pub mod server;

// Re-export commonly used types for convenience
pub use movie_store::{InMemoryMovieStore, MovieStore, StoreError};
pub use server::{run_server, RequestsLoggingLevel, ServerConfig};
