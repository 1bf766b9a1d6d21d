pub mod grid;
pub mod health;
pub mod solve;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    error::{ApiError, ApiResult},
    game::Grid,
    AppState,
};

/// Largest grid side the API accepts or generates.
/// The search recurses once per tile on a path, so this also bounds its stack depth.
pub const MAX_GRID_SIDE: usize = 10;

pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", api_routes())
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/solve", post(solve::solve_grid))
        .route("/check", post(solve::check_word))
        .route("/grid/random", get(grid::random_grid))
}

/// Build a grid from a request body, refusing anything wider or taller than [`MAX_GRID_SIDE`]
fn grid_from_request(raw: Vec<Vec<String>>) -> ApiResult<Grid> {
    let rows = raw.len();
    let cols = raw.iter().map(Vec::len).max().unwrap_or(0);

    if rows > MAX_GRID_SIDE || cols > MAX_GRID_SIDE {
        return Err(ApiError::BadRequest(format!(
            "grid may be at most {MAX_GRID_SIDE}x{MAX_GRID_SIDE}, got {rows}x{cols}"
        )));
    }

    Ok(Grid::new(raw)?)
}
