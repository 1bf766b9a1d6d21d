use std::{env, process::ExitCode, time::Instant};

use anyhow::{Context, Result};
use word_grid_solver::{config::Config, dictionary::Dictionary, game::{self, Grid}};

/// Print every word found on a grid file.
///
/// Usage: `solve-grid <grid-file> [dictionary-file]`. The dictionary defaults to
/// `DICTIONARY_PATH`. Solutions go to stdout, one per line; diagnostics go to stderr.
///
/// Grid files hold one row per line with tiles separated by whitespace. A sample board and
/// word list ship in `data/`:
///
/// ```text
/// solve-grid data/sample_grid.txt data/sample_words.txt
/// ```
#[tokio::main]
async fn main() -> ExitCode {
    word_grid_solver::init_tracing();

    if let Err(e) = try_main().await {
        eprintln!("Error: {e:#}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

async fn try_main() -> Result<()> {
    let mut args = env::args().skip(1);
    let grid_path = args
        .next()
        .context("usage: solve-grid <grid-file> [dictionary-file]")?;

    let config = Config::from_env()?;
    let dictionary_path = args.next().unwrap_or(config.game.dictionary_path);

    let raw_grid = tokio::fs::read_to_string(&grid_path)
        .await
        .with_context(|| format!("failed to read grid {grid_path}"))?;
    let grid: Grid = raw_grid
        .parse()
        .with_context(|| format!("invalid grid in {grid_path}"))?;
    let dictionary = Dictionary::load(&dictionary_path).await?;

    let t_solve = Instant::now();
    let solutions = game::solve(&grid, &dictionary);
    let solve_secs = t_solve.elapsed().as_secs_f64();

    for word in &solutions {
        println!("{word}");
    }

    let (rows, cols) = grid.dimensions();
    eprintln!(
        "Found {} of {} words on a {}x{} grid in {:.3}s",
        solutions.len(),
        dictionary.len(),
        rows,
        cols,
        solve_secs
    );

    Ok(())
}
