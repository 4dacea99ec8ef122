//! HTTP client for end-to-end tests
//!
//! This module provides a high-level HTTP client that wraps reqwest
//! and provides methods for all movie-catalog-server endpoints.
//!
//! When API routes or request formats change, update only this file.

use super::constants::*;
use reqwest::Response;
use serde_json::json;
use std::time::Duration;

/// HTTP test client
///
/// Redirects are not followed automatically so tests can assert on the
/// 303 returned by the form handler.
pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    // ========================================================================
    // JSON API Endpoints
    // ========================================================================

    /// POST /movies
    pub async fn create_movie(&self, body: &serde_json::Value) -> Response {
        self.client
            .post(format!("{}/movies", self.base_url))
            .json(body)
            .send()
            .await
            .expect("Create movie request failed")
    }

    /// POST /movies with the canonical test movie
    pub async fn create_test_movie(&self) -> Response {
        self.create_movie(&json!({
            "title": MOVIE_1_TITLE,
            "year": MOVIE_1_YEAR,
            "director": MOVIE_1_DIRECTOR,
        }))
        .await
    }

    /// GET /movies
    pub async fn list_movies(&self) -> Response {
        self.client
            .get(format!("{}/movies", self.base_url))
            .send()
            .await
            .expect("List movies request failed")
    }

    /// GET /movies/{id}
    pub async fn get_movie(&self, id: &str) -> Response {
        self.client
            .get(format!("{}/movies/{}", self.base_url, id))
            .send()
            .await
            .expect("Get movie request failed")
    }

    /// PUT /movies/{id}
    pub async fn replace_movie(&self, id: &str, body: &serde_json::Value) -> Response {
        self.client
            .put(format!("{}/movies/{}", self.base_url, id))
            .json(body)
            .send()
            .await
            .expect("Replace movie request failed")
    }

    /// DELETE /movies/{id}
    pub async fn delete_movie(&self, id: &str) -> Response {
        self.client
            .delete(format!("{}/movies/{}", self.base_url, id))
            .send()
            .await
            .expect("Delete movie request failed")
    }

    // ========================================================================
    // HTML Endpoints
    // ========================================================================

    /// GET /
    pub async fn homepage(&self) -> Response {
        self.client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .expect("Homepage request failed")
    }

    /// POST /submit_movie with form-encoded fields
    pub async fn submit_movie_form(&self, fields: &[(&str, &str)]) -> Response {
        self.client
            .post(format!("{}/submit_movie", self.base_url))
            .form(fields)
            .send()
            .await
            .expect("Form submission request failed")
    }

    // ========================================================================
    // Status Endpoint
    // ========================================================================

    /// GET /status
    pub async fn status(&self) -> Response {
        self.client
            .get(format!("{}/status", self.base_url))
            .send()
            .await
            .expect("Status request failed")
    }
}
