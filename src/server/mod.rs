pub mod config;
mod http_layers;
pub mod metrics;
mod movie_routes;
mod pages;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use http_layers::*;
#[allow(unused_imports)] // Used by main.rs
pub use server::run_server;
