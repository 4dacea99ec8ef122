use axum::{http::StatusCode, response::IntoResponse};
use lazy_static::lazy_static;
use prometheus::{
    CounterVec, Encoder, Gauge, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder,
};
use std::time::Duration;

/// Metric name prefix for all movie catalog metrics
const PREFIX: &str = "movie_catalog";

lazy_static! {
    // Global Prometheus registry
    pub static ref REGISTRY: Registry = Registry::new();

    // HTTP Request Metrics
    pub static ref HTTP_REQUESTS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_http_requests_total"), "Total number of HTTP requests"),
        &["method", "endpoint", "status"]
    ).expect("Failed to create http_requests_total metric");

    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            format!("{PREFIX}_http_request_duration_seconds"),
            "HTTP request duration in seconds"
        )
        .buckets(vec![0.001, 0.01, 0.05, 0.1, 0.5, 1.0, 2.0, 5.0]),
        &["method", "endpoint"]
    ).expect("Failed to create http_request_duration_seconds metric");

    // Store Metrics
    pub static ref MOVIES_TOTAL: Gauge = Gauge::new(
        format!("{PREFIX}_movies_total"),
        "Number of movies currently stored"
    ).expect("Failed to create movies_total metric");

    // Validation Metrics
    pub static ref VALIDATION_FAILURES_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_validation_failures_total"), "Rejected submission fields"),
        &["field"]
    ).expect("Failed to create validation_failures_total metric");
}

/// Initialize all metrics and register them with the Prometheus registry
pub fn init_metrics() {
    // Register all metrics - ignore errors if already registered (for tests)
    let _ = REGISTRY.register(Box::new(HTTP_REQUESTS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(HTTP_REQUEST_DURATION_SECONDS.clone()));
    let _ = REGISTRY.register(Box::new(MOVIES_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(VALIDATION_FAILURES_TOTAL.clone()));

    tracing::info!("Metrics system initialized successfully");
}

/// Initialize store-level metrics with the current record count
pub fn init_store_metrics(num_movies: usize) {
    MOVIES_TOTAL.set(num_movies as f64);
    tracing::info!("Store metrics initialized: {} movies", num_movies);
}

/// Record an HTTP request
pub fn record_http_request(method: &str, endpoint: &str, status: u16, duration: Duration) {
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[method, endpoint, &status.to_string()])
        .inc();

    HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&[method, endpoint])
        .observe(duration.as_secs_f64());
}

/// Record a rejected submission field
pub fn record_validation_failure(field: &str) {
    VALIDATION_FAILURES_TOTAL.with_label_values(&[field]).inc();
}

/// Update the stored movie count
pub fn set_movies_total(count: usize) {
    MOVIES_TOTAL.set(count as f64);
}

/// Collapse concrete request paths into a bounded endpoint label set.
pub fn categorize_endpoint(path: &str) -> &'static str {
    if path == "/movies" {
        "movies"
    } else if path.starts_with("/movies/") {
        "movie"
    } else if path == "/submit_movie" {
        "submit_form"
    } else if path == "/" {
        "home"
    } else if path == "/status" {
        "status"
    } else {
        "other"
    }
}

/// Handler for the /metrics endpoint
pub async fn metrics_handler() -> impl IntoResponse {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();

    let mut buffer = vec![];
    match encoder.encode(&metric_families, &mut buffer) {
        Ok(()) => {
            let response = String::from_utf8(buffer).unwrap_or_else(|_| String::from(""));
            (StatusCode::OK, response)
        }
        Err(e) => {
            tracing::error!("Failed to encode metrics: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to encode metrics: {}", e),
            )
        }
    }
}
