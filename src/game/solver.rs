use std::collections::{BTreeMap, HashSet};

use crate::{dictionary::Dictionary, game::Grid, models::Position};

/// Row/column deltas of the eight neighbouring tiles
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Find every dictionary word that can be traced on the grid.
///
/// Returns the words in ascending lexical order, each once. An empty grid or an
/// empty dictionary yields an empty list without searching.
pub fn solve(grid: &Grid, dictionary: &Dictionary) -> Vec<String> {
    solve_with_paths(grid, dictionary).into_keys().collect()
}

/// Like [`solve`], but keeps one witnessing path for each word found
pub fn solve_with_paths(grid: &Grid, dictionary: &Dictionary) -> BTreeMap<String, Vec<Position>> {
    if grid.is_empty() || dictionary.is_empty() {
        return BTreeMap::new();
    }

    let solutions: BTreeMap<String, Vec<Position>> = dictionary
        .iter()
        .filter_map(|word| find_path(grid, word).map(|path| (word.to_string(), path)))
        .collect();

    let (rows, cols) = grid.dimensions();
    tracing::debug!(
        "Solved {}x{} grid: {} of {} words found",
        rows,
        cols,
        solutions.len(),
        dictionary.len()
    );

    solutions
}

/// Trace `word` on the grid, trying start tiles in row-major order.
///
/// `word` is compared byte-for-byte against the tile symbols, so it must already be
/// upper-case. Returns the first path that spells it.
pub fn find_path(grid: &Grid, word: &str) -> Option<Vec<Position>> {
    if word.is_empty() {
        return None;
    }

    grid.positions().find_map(|start| {
        let mut attempt = Attempt::new(grid, word);
        attempt.trace(start, 0).then_some(attempt.path)
    })
}

/// State for one (word, start tile) search
struct Attempt<'a> {
    grid: &'a Grid,
    word: &'a [u8],
    visited: HashSet<Position>,
    path: Vec<Position>,
}

impl<'a> Attempt<'a> {
    fn new(grid: &'a Grid, word: &'a str) -> Self {
        Self {
            grid,
            word: word.as_bytes(),
            visited: HashSet::new(),
            path: Vec::new(),
        }
    }

    /// Try to continue the word at `pos`, with `word[..index]` already matched.
    /// On success `path` holds the full path; on failure it is left as it was on entry.
    fn trace(&mut self, pos: Position, index: usize) -> bool {
        let Some(tile) = self.grid.get(pos) else {
            return false;
        };
        if self.visited.contains(&pos) {
            return false;
        }
        // whole tile or nothing
        if !self.word[index..].starts_with(tile.as_bytes()) {
            return false;
        }

        let next_index = index + tile.len();
        self.path.push(pos);
        if next_index == self.word.len() {
            return true;
        }

        self.visited.insert(pos);
        let found = NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(d_row, d_col)| pos.offset(d_row, d_col))
            .any(|next| self.trace(next, next_index));
        self.visited.remove(&pos);

        if !found {
            self.path.pop();
        }
        found
    }
}
