//! "Perft" performance test: count the number of leaves at a given depth.
//! See: http://www.aartbik.com/MISC/reversi.html
//!
//! Colors alternate each ply starting with Black. Passing is not modelled, so
//! a position where the mover has no placement counts as a leaf; the published
//! counts match through depth 8, before the first pass can occur.

use crate::engine::{self, captures};
use crate::{Board, Color, Location};

pub fn run_perft(depth: u64) -> u64 {
    leaves_below(Board::new(), Color::Black, depth)
}

/// Every placement `color` could legally make on `board`.
pub fn placements(board: &Board, color: Color) -> impl Iterator<Item = Location> + '_ {
    board.cells().filter_map(move |(loc, cell)| {
        let legal = cell.is_none()
            && engine::is_adjacent(board, loc)
            && !captures(board, loc, color).is_empty();
        if legal {
            Some(loc)
        } else {
            None
        }
    })
}

fn leaves_below(board: Board, color: Color, depth: u64) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut leaves = 0;
    let mut any_placement = false;
    for loc in placements(&board, color) {
        let mut next = board;
        if engine::attempt_move(&mut next, loc, color).is_ok() {
            any_placement = true;
            leaves += leaves_below(next, !color, depth - 1);
        }
    }

    if any_placement {
        leaves
    } else {
        1
    }
}
