//! In-memory movie store.
//!
//! A mutex-guarded map keyed by id. The mutex makes every operation
//! individually atomic under the multithreaded runtime; nothing survives
//! the process.

use super::models::{Movie, MovieRecord};
use super::trait_def::{MovieStore, StoreError, StoreResult};
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryMovieStore {
    movies: Mutex<HashMap<Uuid, Movie>>,
}

impl InMemoryMovieStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MovieStore for InMemoryMovieStore {
    fn create(&self, record: MovieRecord) -> Movie {
        let movie = Movie::from_record(Uuid::new_v4(), record);
        self.movies.lock().unwrap().insert(movie.id, movie.clone());
        movie
    }

    fn list(&self) -> Vec<Movie> {
        self.movies.lock().unwrap().values().cloned().collect()
    }

    fn get(&self, id: &Uuid) -> StoreResult<Movie> {
        self.movies
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or(StoreError::NotFound(*id))
    }

    fn replace(&self, id: &Uuid, record: MovieRecord) -> StoreResult<Movie> {
        let mut movies = self.movies.lock().unwrap();
        match movies.get_mut(id) {
            Some(existing) => {
                *existing = Movie::from_record(*id, record);
                Ok(existing.clone())
            }
            None => Err(StoreError::NotFound(*id)),
        }
    }

    fn delete(&self, id: &Uuid) -> StoreResult<()> {
        match self.movies.lock().unwrap().remove(id) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound(*id)),
        }
    }

    fn count(&self) -> usize {
        self.movies.lock().unwrap().len()
    }
}
