//! Crossword-style grid generation.
//!
//! Places a fixed list of words on a rectangular board so that they cross on shared
//! letters, searching every placement exhaustively for the arrangement with the most
//! crossings. Meant for small word lists and small grids.
//!
//! ```
//! let solution = crossgen::crossword::generate(&["cat", "car"], 3, 3).unwrap();
//! assert_eq!(solution.score, 1);
//! print!("{}", solution.grid);
//! ```

pub mod config;
pub mod crossword;
pub mod errors;
pub mod log;
pub mod utils;
