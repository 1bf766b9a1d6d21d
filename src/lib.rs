//! Find every dictionary word that can be traced through a letter grid.
//!
//! Words are spelled by walking between adjacent tiles (diagonals included) without
//! reusing a tile. Tiles may hold more than one letter, such as `QU`.

pub mod config;
pub mod dictionary;
pub mod error;
pub mod game;
pub mod models;
pub mod routes;
pub mod utils;

use std::sync::Arc;

use axum::Router;
use crate::config::Config;
use crate::dictionary::Dictionary;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Application state shared across all handlers
pub struct AppState {
    pub config: Config,
    pub dictionary: Dictionary,
}

impl AppState {
    pub fn new(config: Config, dictionary: Dictionary) -> Self {
        Self { config, dictionary }
    }
}

/// Build the full HTTP application
pub fn app(state: Arc<AppState>) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    routes::create_routes()
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Initialize tracing for the binaries
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "word_grid_solver=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
