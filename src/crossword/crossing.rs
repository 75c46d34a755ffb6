use super::grid::Grid;
use super::util::{Direction, Position};
use super::vocab::Vocabulary;

/// What writing a letter does to the run of letters perpendicular to the word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossing {
    /// No letters on either side, nothing is crossed
    None,
    /// The run spells a known word
    Valid,
    /// The run spells something outside the vocabulary
    Invalid,
}

impl Crossing {
    pub fn score(&self) -> u32 {
        match self {
            Self::Valid => 1,
            _ => 0,
        }
    }
}

/// Classifies the run along `scan` that would pass through `pos` once `letter` is
/// written there. Only the current grid is read; `pos` itself may be empty or already
/// hold `letter`
pub fn check_crossing(
    grid: &Grid,
    pos: Position,
    scan: Direction,
    letter: char,
    vocab: &Vocabulary,
) -> Crossing {
    // Scan backwards and forwards until the first gap or the edge of the board
    let mut run = pos
        .iter_prev(scan)
        .map_while(|p| grid.letter(p))
        .collect::<Vec<_>>();
    run.reverse();
    run.push(letter);
    run.extend(pos.iter_next(scan).map_while(|p| grid.letter(p)));

    if run.len() <= 1 {
        return Crossing::None;
    }

    let crossed_word = run.into_iter().collect::<String>();
    if vocab.contains(&crossed_word) {
        Crossing::Valid
    } else {
        Crossing::Invalid
    }
}
