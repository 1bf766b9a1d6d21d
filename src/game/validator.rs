use crate::{dictionary::Dictionary, error::GridError, game::Grid, models::Position};
use std::collections::HashSet;

/// Why a submitted word/path pair was refused
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathRejection {
    #[error("path is empty, leaves the grid, skips a tile or reuses one")]
    InvalidPath,

    #[error("path spells {spelled}, not {word}")]
    Mismatch { word: String, spelled: String },

    #[error("{0} is not in the dictionary")]
    NotInDictionary(String),
}

pub struct WordValidator;

impl WordValidator {
    /// Check that a submitted path spells `word` on the grid and that `word` is a dictionary word
    pub fn check(
        grid: &Grid,
        dictionary: &Dictionary,
        word: &str,
        positions: &[Position],
    ) -> Result<(), PathRejection> {
        if !Self::is_valid_path(grid, positions) {
            return Err(PathRejection::InvalidPath);
        }

        let word = word.to_uppercase();
        let spelled = Self::spell(grid, positions).map_err(|_| PathRejection::InvalidPath)?;
        if spelled != word {
            return Err(PathRejection::Mismatch { word, spelled });
        }

        if !dictionary.contains(&word) {
            return Err(PathRejection::NotInDictionary(word));
        }

        Ok(())
    }

    /// Validate that positions form a valid path on the grid
    pub fn is_valid_path(grid: &Grid, positions: &[Position]) -> bool {
        if positions.is_empty() {
            return false;
        }

        // Check that each position is adjacent to the previous one
        if !positions.windows(2).all(|w| w[0].is_adjacent(&w[1])) {
            return false;
        }

        // Check that no position is used twice
        let unique_positions: HashSet<_> = positions.iter().collect();
        if unique_positions.len() != positions.len() {
            return false;
        }

        positions.iter().all(|pos| grid.contains(*pos))
    }

    /// Concatenate the tile symbols along a path
    pub fn spell(grid: &Grid, positions: &[Position]) -> Result<String, GridError> {
        positions
            .iter()
            .map(|pos| grid.symbol_at(pos.row, pos.col))
            .collect()
    }
}
