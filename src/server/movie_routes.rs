//! Movie CRUD HTTP routes.
//!
//! The JSON API surface:
//! - POST /movies - create a movie from a JSON submission
//! - GET /movies - list all movies
//! - GET /movies/{id} - get one movie
//! - PUT /movies/{id} - replace all fields of an existing movie
//! - DELETE /movies/{id} - delete a movie

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::movie_store::{validate_submission, MovieSubmission, StoreError, ValidationError};
use crate::server::metrics;
use crate::server::state::{GuardedMovieStore, ServerState};

#[derive(Serialize)]
struct FieldErrorBody {
    field: String,
    message: String,
}

#[derive(Serialize)]
struct ValidationErrorBody {
    error: String,
    fields: Vec<FieldErrorBody>,
}

/// 422 response enumerating every field violation.
pub(super) fn validation_error_response(err: ValidationError) -> Response {
    for field_error in &err.errors {
        metrics::record_validation_failure(field_error.field());
    }
    debug!("Rejected submission: {}", err);

    let body = ValidationErrorBody {
        error: "validation failed".to_string(),
        fields: err
            .errors
            .iter()
            .map(|e| FieldErrorBody {
                field: e.field().to_string(),
                message: e.to_string(),
            })
            .collect(),
    };
    (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
}

async fn create_movie(
    State(store): State<GuardedMovieStore>,
    Json(submission): Json<MovieSubmission>,
) -> Response {
    match validate_submission(submission) {
        Ok(record) => {
            let movie = store.create(record);
            metrics::set_movies_total(store.count());
            debug!("Created movie {}", movie.id);
            (StatusCode::CREATED, Json(movie)).into_response()
        }
        Err(err) => validation_error_response(err),
    }
}

async fn list_movies(State(store): State<GuardedMovieStore>) -> Response {
    Json(store.list()).into_response()
}

async fn get_movie(State(store): State<GuardedMovieStore>, Path(id): Path<Uuid>) -> Response {
    match store.get(&id) {
        Ok(movie) => Json(movie).into_response(),
        Err(StoreError::NotFound(_)) => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn replace_movie(
    State(store): State<GuardedMovieStore>,
    Path(id): Path<Uuid>,
    Json(submission): Json<MovieSubmission>,
) -> Response {
    // Validation runs before the existence check; an invalid body wins
    // over an unknown id.
    match validate_submission(submission) {
        Ok(record) => match store.replace(&id, record) {
            Ok(movie) => {
                debug!("Replaced movie {}", id);
                Json(movie).into_response()
            }
            Err(StoreError::NotFound(_)) => StatusCode::NOT_FOUND.into_response(),
        },
        Err(err) => validation_error_response(err),
    }
}

async fn delete_movie(State(store): State<GuardedMovieStore>, Path(id): Path<Uuid>) -> Response {
    match store.delete(&id) {
        Ok(()) => {
            metrics::set_movies_total(store.count());
            debug!("Deleted movie {}", id);
            StatusCode::NO_CONTENT.into_response()
        }
        Err(StoreError::NotFound(_)) => StatusCode::NOT_FOUND.into_response(),
    }
}

pub(super) fn make_movie_routes(state: ServerState) -> Router {
    Router::new()
        .route("/movies", post(create_movie))
        .route("/movies", get(list_movies))
        .route("/movies/{id}", get(get_movie))
        .route("/movies/{id}", put(replace_movie))
        .route("/movies/{id}", delete(delete_movie))
        .with_state(state)
}
