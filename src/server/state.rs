use axum::extract::FromRef;

use crate::movie_store::MovieStore;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

pub type GuardedMovieStore = Arc<dyn MovieStore>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub movie_store: GuardedMovieStore,
    pub version: String,
}

impl FromRef<ServerState> for GuardedMovieStore {
    fn from_ref(input: &ServerState) -> Self {
        input.movie_store.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
