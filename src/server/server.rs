use anyhow::Result;
use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use tracing::error;

use crate::movie_store::MovieStore;

use axum::{
    extract::State,
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use super::{
    log_requests, metrics, movie_routes::make_movie_routes, pages, state::*, RequestsLoggingLevel,
    ServerConfig,
};

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub version: String,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

async fn status(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        version: state.version.clone(),
    };
    Json(stats)
}

impl ServerState {
    fn new(config: ServerConfig, movie_store: GuardedMovieStore) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            movie_store,
            version: format!("{}-{}", env!("CARGO_PKG_VERSION"), env!("GIT_HASH")),
        }
    }
}

pub fn make_app(config: ServerConfig, movie_store: Arc<dyn MovieStore>) -> Result<Router> {
    let state = ServerState::new(config, movie_store);

    let page_routes: Router = Router::new()
        .route("/", get(pages::homepage))
        .route("/submit_movie", post(pages::submit_movie))
        .with_state(state.clone());

    let api_routes = make_movie_routes(state.clone());

    let status_routes: Router = Router::new()
        .route("/status", get(status))
        .with_state(state.clone());

    let app: Router = page_routes
        .merge(api_routes)
        .merge(status_routes)
        .layer(middleware::from_fn_with_state(state, log_requests));

    Ok(app)
}

pub async fn run_server(
    movie_store: Arc<dyn MovieStore>,
    requests_logging_level: RequestsLoggingLevel,
    port: u16,
    metrics_port: u16,
) -> Result<()> {
    let config = ServerConfig {
        port,
        requests_logging_level,
    };
    let app = make_app(config, movie_store)?;

    // Metrics are served on their own port so they are never exposed on
    // the public listener.
    let metrics_app: Router = Router::new().route("/metrics", get(metrics::metrics_handler));
    let metrics_listener =
        tokio::net::TcpListener::bind(format!("127.0.0.1:{}", metrics_port)).await?;
    tokio::spawn(async move {
        if let Err(err) = axum::serve(metrics_listener, metrics_app).await {
            error!("Metrics server failed: {}", err);
        }
    });

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;

    Ok(axum::serve(listener, app).await?)
}
