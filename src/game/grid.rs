use std::str::FromStr;

use crate::{error::GridError, models::Position};

/// An immutable rectangular board of tile symbols.
///
/// Every symbol is upper-cased when the grid is built. A tile may hold more than one
/// letter (`QU` is the usual example) and always counts as a single cell for adjacency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    tiles: Vec<Vec<String>>,
    cols: usize,
}

impl Grid {
    /// Build a grid from raw rows of tile symbols.
    ///
    /// Fails with [`GridError::MalformedGrid`] when the rows have different lengths and with
    /// [`GridError::EmptyTile`] when a symbol is the empty string. Zero rows is a valid,
    /// empty grid.
    pub fn new<R, T>(raw: impl IntoIterator<Item = R>) -> Result<Self, GridError>
    where
        R: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut tiles: Vec<Vec<String>> = Vec::new();
        let mut cols = None;

        for (row, raw_row) in raw.into_iter().enumerate() {
            let mut clean_row = Vec::new();
            for (col, tile) in raw_row.into_iter().enumerate() {
                let tile = tile.as_ref();
                if tile.is_empty() {
                    return Err(GridError::EmptyTile { row, col });
                }
                clean_row.push(tile.to_uppercase());
            }

            let expected = *cols.get_or_insert(clean_row.len());
            if clean_row.len() != expected {
                return Err(GridError::MalformedGrid {
                    row,
                    expected,
                    found: clean_row.len(),
                });
            }

            tiles.push(clean_row);
        }

        Ok(Self {
            tiles,
            cols: cols.unwrap_or(0),
        })
    }

    /// An empty grid
    pub fn empty() -> Self {
        Self {
            tiles: Vec::new(),
            cols: 0,
        }
    }

    /// Returns `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.tiles.len(), self.cols)
    }

    /// True when the grid has no rows or no columns
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty() || self.cols == 0
    }

    /// Look up the symbol at `(row, col)`
    pub fn symbol_at(&self, row: usize, col: usize) -> Result<&str, GridError> {
        self.get(Position::new(row, col))
            .ok_or(GridError::OutOfBounds {
                row,
                col,
                rows: self.tiles.len(),
                cols: self.cols,
            })
    }

    /// Non-failing lookup, `None` outside the grid
    pub fn get(&self, pos: Position) -> Option<&str> {
        self.tiles
            .get(pos.row)
            .and_then(|row| row.get(pos.col))
            .map(String::as_str)
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.tiles.len() && pos.col < self.cols
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.tiles.len())
            .flat_map(move |row| (0..self.cols).map(move |col| Position::new(row, col)))
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.tiles
    }

    /// Wrap rows that are already upper-case, non-empty and `cols` wide
    pub(crate) fn from_checked_rows(tiles: Vec<Vec<String>>, cols: usize) -> Self {
        debug_assert!(tiles.iter().all(|row| row.len() == cols));
        let cols = if tiles.is_empty() { 0 } else { cols };
        Self { tiles, cols }
    }
}

/// Parses one row per line with tiles separated by whitespace. Blank lines are skipped.
impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::new(
            s.lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::split_whitespace),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_from_text() {
        let grid: Grid = "t w y r\ne n p h\n\ng z qu r\n".parse().unwrap();
        assert_eq!(grid.dimensions(), (3, 4));
        assert_eq!(grid.symbol_at(2, 2).unwrap(), "QU");

        assert!("a b\nc".parse::<Grid>().is_err());
        assert!("".parse::<Grid>().unwrap().is_empty());
    }

    #[test]
    fn test_grid_uppercases_tiles() {
        let grid = Grid::new(vec![vec!["a", "Qu"], vec!["r", "T"]]).unwrap();
        assert_eq!(grid.symbol_at(0, 0).unwrap(), "A");
        assert_eq!(grid.symbol_at(0, 1).unwrap(), "QU");
        assert_eq!(grid.symbol_at(1, 0).unwrap(), "R");
        assert_eq!(grid.dimensions(), (2, 2));
    }

    #[test]
    fn test_symbol_at_out_of_bounds() {
        let grid = Grid::new(vec![vec!["A", "B", "C"]]).unwrap();
        assert_eq!(
            grid.symbol_at(1, 0),
            Err(GridError::OutOfBounds {
                row: 1,
                col: 0,
                rows: 1,
                cols: 3
            })
        );
        assert!(grid.symbol_at(0, 3).is_err());
        assert!(grid.symbol_at(0, 2).is_ok());
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let result = Grid::new(vec![vec!["A", "B"], vec!["C"]]);
        assert_eq!(
            result,
            Err(GridError::MalformedGrid {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_empty_tile_rejected() {
        let result = Grid::new(vec![vec!["A", ""]]);
        assert_eq!(result, Err(GridError::EmptyTile { row: 0, col: 1 }));
    }

    #[test]
    fn test_empty_grid() {
        let grid = Grid::new(Vec::<Vec<String>>::new()).unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.dimensions(), (0, 0));
        assert_eq!(grid.positions().count(), 0);
        assert_eq!(grid, Grid::empty());

        // rows with no columns are empty too
        let grid = Grid::new(vec![Vec::<String>::new(), Vec::new()]).unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.dimensions(), (2, 0));
    }

    #[test]
    fn test_positions_row_major() {
        let grid = Grid::new(vec![vec!["A", "B"], vec!["C", "D"]]).unwrap();
        let positions: Vec<_> = grid.positions().collect();
        assert_eq!(
            positions,
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 1)
            ]
        );
        assert!(grid.contains(Position::new(1, 1)));
        assert!(!grid.contains(Position::new(2, 0)));
    }
}
