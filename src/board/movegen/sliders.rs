use std::ops::Range;

use super::super::state::Position;
use super::super::types::{Piece, Square};
use super::GenMode;

impl Position {
    /// Walk each ray up to the first occupied square. The blocker is included
    /// when it is an enemy, or in `Attacks` mode whatever its color.
    pub(super) fn slider_targets(
        &self,
        piece: &Piece,
        dirs: Range<usize>,
        mode: GenMode,
        out: &mut Vec<Square>,
    ) {
        for dir in dirs {
            for &to in self.tables.ray(piece.square, dir) {
                match self.piece_at(to) {
                    None => out.push(to),
                    Some(blocker) => {
                        if mode == GenMode::Attacks || blocker.color != piece.color {
                            out.push(to);
                        }
                        break;
                    }
                }
            }
        }
    }
}
