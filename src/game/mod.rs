// Grid model and word search

pub mod generator;
pub mod grid;
pub mod solver;
pub mod validator;

pub use generator::GridGenerator;
pub use grid::Grid;
pub use solver::{find_path, solve, solve_with_paths};
pub use validator::{PathRejection, WordValidator};
