use std::{collections::BTreeMap, sync::Arc};

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::{
    dictionary::Dictionary,
    error::{ApiError, ApiResult},
    game::{self, WordValidator},
    models::Position,
    routes::grid_from_request,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct SolveRequest {
    pub grid: Vec<Vec<String>>,
    /// Replaces the server dictionary for this request when present
    #[serde(default)]
    pub words: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SolveResponse {
    /// Found words in ascending order
    pub words: Vec<String>,
    /// One path for each found word
    pub paths: BTreeMap<String, Vec<Position>>,
}

#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    pub grid: Vec<Vec<String>>,
    pub word: String,
    pub positions: Vec<Position>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Find all words on a submitted grid.
/// The search runs on the blocking pool so a slow grid never holds up a runtime worker.
pub async fn solve_grid(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SolveRequest>,
) -> ApiResult<Json<SolveResponse>> {
    let grid = grid_from_request(payload.grid)?;
    let words = payload.words;

    let paths = tokio::task::spawn_blocking(move || match words {
        Some(words) => game::solve_with_paths(&grid, &Dictionary::from_words(words)),
        None => game::solve_with_paths(&grid, &state.dictionary),
    })
    .await
    .map_err(|e| ApiError::Internal(format!("solver task failed: {e}")))?;
    let words: Vec<String> = paths.keys().cloned().collect();

    tracing::info!("Solve request found {} words", words.len());

    Ok(Json(SolveResponse { words, paths }))
}

/// Check a single word and path against the server dictionary
pub async fn check_word(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CheckRequest>,
) -> ApiResult<Json<CheckResponse>> {
    let grid = grid_from_request(payload.grid)?;

    let checked = WordValidator::check(
        &grid,
        &state.dictionary,
        &payload.word,
        &payload.positions,
    );
    let response = match checked {
        Ok(()) => CheckResponse {
            valid: true,
            reason: None,
        },
        Err(rejection) => {
            tracing::debug!("Rejected {}: {}", payload.word, rejection);
            CheckResponse {
                valid: false,
                reason: Some(rejection.to_string()),
            }
        }
    };

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, routes::MAX_GRID_SIDE};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_app() -> Router {
        let dictionary = Dictionary::from_words(["quart", "art", "rat", "tar", "ab"]);
        crate::app(Arc::new(AppState::new(Config::default(), dictionary)))
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let resp = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_solve_with_server_dictionary() {
        let (status, body) = post_json(
            test_app(),
            "/api/solve",
            json!({ "grid": [["qu", "a"], ["r", "t"]] }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let resp: SolveResponse = serde_json::from_value(body).unwrap();
        assert_eq!(resp.words, vec!["ART", "QUART", "RAT", "TAR"]);
        assert_eq!(
            resp.paths["QUART"],
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 1)
            ]
        );
    }

    #[tokio::test]
    async fn test_solve_with_request_words() {
        let (status, body) = post_json(
            test_app(),
            "/api/solve",
            json!({ "grid": [["A", "B", "C"]], "words": ["ab", "bc", "abc"] }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["words"], json!(["ABC"]));
    }

    #[tokio::test]
    async fn test_solve_rejects_ragged_grid() {
        let (status, body) = post_json(
            test_app(),
            "/api/solve",
            json!({ "grid": [["A", "B"], ["C"]] }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_GRID");
    }

    fn oversized_grid() -> Value {
        json!([vec!["A"; MAX_GRID_SIDE + 1]])
    }

    #[tokio::test]
    async fn test_solve_rejects_oversized_grid() {
        let long_word = "A".repeat(MAX_GRID_SIDE + 1);
        let (status, body) = post_json(
            test_app(),
            "/api/solve",
            json!({ "grid": oversized_grid(), "words": [long_word] }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "BAD_REQUEST");

        let tall: Vec<Vec<&str>> = vec![vec!["A"]; MAX_GRID_SIDE + 1];
        let (status, _) = post_json(test_app(), "/api/solve", json!({ "grid": tall })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_solve_accepts_largest_grid() {
        let side = vec![vec!["A"; MAX_GRID_SIDE]; MAX_GRID_SIDE];
        let (status, body) = post_json(
            test_app(),
            "/api/solve",
            json!({ "grid": side, "words": ["aaa", "aab"] }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["words"], json!(["AAA"]));
    }

    #[tokio::test]
    async fn test_check_rejects_oversized_grid() {
        let (status, body) = post_json(
            test_app(),
            "/api/check",
            json!({
                "grid": oversized_grid(),
                "word": "aaa",
                "positions": [{"row": 0, "col": 0}, {"row": 0, "col": 1}, {"row": 0, "col": 2}]
            }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_solve_empty_grid() {
        let (status, body) = post_json(test_app(), "/api/solve", json!({ "grid": [] })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["words"], json!([]));
    }

    #[tokio::test]
    async fn test_check_word() {
        let (status, body) = post_json(
            test_app(),
            "/api/check",
            json!({
                "grid": [["Qu", "A"], ["R", "T"]],
                "word": "rat",
                "positions": [{"row": 1, "col": 0}, {"row": 0, "col": 1}, {"row": 1, "col": 1}]
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["valid"], true);
        assert!(body.get("reason").is_none());

        let (_, body) = post_json(
            test_app(),
            "/api/check",
            json!({
                "grid": [["Qu", "A"], ["R", "T"]],
                "word": "rat",
                "positions": [{"row": 1, "col": 0}, {"row": 1, "col": 1}]
            }),
        )
        .await;

        assert_eq!(body["valid"], false);
        assert_eq!(body["reason"], "path spells RT, not RAT");
    }
}
