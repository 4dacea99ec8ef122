//! Shared constants for end-to-end tests
//!
//! This module contains all constants used across the test suite.
//! When test data changes, update only this file.

// ============================================================================
// Test Movie Data
// ============================================================================

/// Title of the canonical test movie
pub const MOVIE_1_TITLE: &str = "Inception";

/// Release year of the canonical test movie
pub const MOVIE_1_YEAR: i64 = 2010;

/// Director of the canonical test movie
pub const MOVIE_1_DIRECTOR: &str = "Christopher Nolan";

/// Title of the second test movie
pub const MOVIE_2_TITLE: &str = "Seven Samurai";

/// Release year of the second test movie
pub const MOVIE_2_YEAR: i64 = 1954;

/// Director of the second test movie
pub const MOVIE_2_DIRECTOR: &str = "Akira Kurosawa";

/// A well-formed id that no stored movie will ever have
pub const UNKNOWN_MOVIE_ID: &str = "7e4ba309-8bbc-4d07-9f0a-2d6c27a9a3a1";

// ============================================================================
// Timeouts
// ============================================================================

/// Timeout for individual HTTP requests in seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 5;

/// Maximum time to wait for the test server to become ready
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Interval between readiness polls
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 20;
