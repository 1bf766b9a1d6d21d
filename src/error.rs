use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Errors raised while building or reading a [`Grid`](crate::game::Grid)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("position ({row}, {col}) is outside a {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("row {row} has {found} tiles, expected {expected}")]
    MalformedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("tile at ({row}, {col}) is empty")]
    EmptyTile { row: usize, col: usize },
}

/// Errors returned by the HTTP handlers
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid grid: {0}")]
    InvalidGrid(#[from] GridError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::InvalidGrid(_) => (StatusCode::BAD_REQUEST, "INVALID_GRID"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        tracing::warn!("Rejecting request: {}", self);

        let body = ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_error_messages() {
        let err = GridError::OutOfBounds {
            row: 4,
            col: 0,
            rows: 4,
            cols: 4,
        };
        assert_eq!(err.to_string(), "position (4, 0) is outside a 4x4 grid");

        let err = GridError::MalformedGrid {
            row: 1,
            expected: 3,
            found: 2,
        };
        assert_eq!(err.to_string(), "row 1 has 2 tiles, expected 3");
    }

    #[test]
    fn test_api_error_status_codes() {
        let err = ApiError::from(GridError::EmptyTile { row: 0, col: 0 });
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

        let err = ApiError::BadRequest("rows must be positive".to_string());
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

        let err = ApiError::Internal("solver task panicked".to_string());
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
