use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    error::{ApiError, ApiResult},
    game::GridGenerator,
    routes::MAX_GRID_SIDE,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct RandomGridQuery {
    pub rows: Option<usize>,
    pub cols: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GridResponse {
    pub grid: Vec<Vec<String>>,
}

/// Generate a random grid, sized from the query or the configured defaults
pub async fn random_grid(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RandomGridQuery>,
) -> ApiResult<Json<GridResponse>> {
    let rows = query.rows.unwrap_or(state.config.game.grid_rows);
    let cols = query.cols.unwrap_or(state.config.game.grid_cols);

    if rows == 0 || cols == 0 || rows > MAX_GRID_SIDE || cols > MAX_GRID_SIDE {
        return Err(ApiError::BadRequest(format!(
            "grid size must be between 1x1 and {MAX_GRID_SIDE}x{MAX_GRID_SIDE}, got {rows}x{cols}"
        )));
    }

    let grid = GridGenerator::generate(rows, cols);

    Ok(Json(GridResponse {
        grid: grid.rows().to_vec(),
    }))
}
