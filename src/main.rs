use std::sync::Arc;

use anyhow::Result;
use word_grid_solver::{config::Config, dictionary::Dictionary, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    word_grid_solver::init_tracing();

    tracing::info!("Starting word grid solver server...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Load dictionary
    let dictionary = match Dictionary::load(&config.game.dictionary_path).await {
        Ok(dict) => {
            tracing::info!("Dictionary loaded successfully");
            dict
        }
        Err(e) => {
            tracing::warn!(
                "Failed to load dictionary: {:#}. Using empty dictionary for now.",
                e
            );
            tracing::warn!(
                "Download a word list to {} for full functionality",
                config.game.dictionary_path
            );
            Dictionary::empty()
        }
    };

    let state = Arc::new(AppState::new(config.clone(), dictionary));
    let app = word_grid_solver::app(state);

    // Start server
    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Health check: http://{}/health", addr);
    tracing::info!("Solve endpoint: http://{}/api/solve", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
