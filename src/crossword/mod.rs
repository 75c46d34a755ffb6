pub mod crossing;
pub mod generator;
pub mod grid;
pub mod order;
pub mod placement;
pub mod search;
pub mod util;
pub mod vocab;

pub use self::generator::{generate, generate_many, generate_with, Solution};
pub use self::grid::Grid;
pub use self::search::SearchOptions;
pub use self::util::{Direction, Placement, Position};
pub use self::vocab::Vocabulary;
