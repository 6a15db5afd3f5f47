//! Move ordering utilities for search.

use crate::board::state::Position;
use crate::board::types::{Color, Move};

/// Sort `moves` by the static evaluation one ply ahead, best for `side`
/// first. Equal scores keep generation order.
pub(crate) fn order_by_static_eval(
    pos: &mut Position,
    moves: &[Move],
    side: Color,
) -> Vec<(Move, i32)> {
    let mut scored: Vec<(Move, i32)> = moves
        .iter()
        .map(|&mv| {
            pos.make_move(mv, false);
            let score = pos.evaluate(side);
            pos.unmake_move();
            (mv, score)
        })
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored
}
