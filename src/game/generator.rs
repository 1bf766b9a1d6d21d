use rand::Rng;

use crate::{game::Grid, utils::letters::get_cumulative_distribution};

pub struct GridGenerator;

impl GridGenerator {
    /// Generate a `rows` x `cols` grid with weighted letter distribution.
    /// `Q` always comes out as the two-letter tile `QU`.
    pub fn generate(rows: usize, cols: usize) -> Grid {
        let mut rng = rand::rng();
        let cumulative_dist = get_cumulative_distribution();
        let total = cumulative_dist.last().map_or(0.0, |(_, cumulative)| *cumulative);

        let mut tiles = Vec::with_capacity(rows);

        for _ in 0..rows {
            let mut row = Vec::with_capacity(cols);
            for _ in 0..cols {
                let letter = Self::random_letter(&cumulative_dist, total, &mut rng);
                row.push(Self::tile_for(letter));
            }
            tiles.push(row);
        }

        Grid::from_checked_rows(tiles, cols)
    }

    fn random_letter(cumulative_dist: &[(char, f32)], total: f32, rng: &mut impl Rng) -> char {
        let random_value = rng.random::<f32>() * total;

        for (letter, cumulative) in cumulative_dist {
            if random_value <= *cumulative {
                return *letter;
            }
        }

        'E' // Fallback
    }

    fn tile_for(letter: char) -> String {
        match letter {
            'Q' => "QU".to_string(),
            other => other.to_string(),
        }
    }
}
