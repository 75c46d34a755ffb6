use super::crossing::{check_crossing, Crossing};
use super::grid::Grid;
use super::util::Placement;
use super::vocab::Vocabulary;

/// Checks whether `word` can be written at `placement` and counts the crossings it
/// would form. Returns None for an illegal placement; a legal placement that crosses
/// nothing scores Some(0). The grid is only read, committing is left to the caller
pub fn score_placement(
    grid: &Grid,
    word: &str,
    placement: Placement,
    vocab: &Vocabulary,
) -> Option<u32> {
    let dir = placement.dir;
    let len = word.chars().count();
    let start = placement.pos[dir];
    let extent = grid.extent(dir);

    // Check that we are within bounds
    if len == 0 || start + len > extent || placement.pos[dir.flip()] >= grid.extent(dir.flip()) {
        return None;
    }

    // Check for a clear space or border at the start and end
    if let Some(before) = placement.pos.prev(dir) {
        if grid.is_letter(before) {
            return None;
        }
    }
    if grid.is_letter(placement.pos.step_n(len, dir)) {
        return None;
    }

    let mut score = 0;
    for (pos, c) in placement.iter(word) {
        match grid.letter(pos) {
            Some(l) if l != c => return None,
            _ => {}
        }
        // Another word already runs through here in the same direction
        if grid.is_covered(pos, dir) {
            return None;
        }

        match check_crossing(grid, pos, dir.flip(), c, vocab) {
            Crossing::Invalid => return None,
            crossing => score += crossing.score(),
        }
    }
    Some(score)
}
