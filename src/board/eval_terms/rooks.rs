use crate::board::state::Position;
use crate::board::types::{Color, PieceKind};

use super::tables::ROOK_UNBLOCKED_FILE;

impl Position {
    /// Bonus per rook whose file holds no pawn of its own color.
    #[must_use]
    pub fn eval_rooks(&self, color: Color) -> i32 {
        let pawn_files = self.pawn_files(color);
        let unblocked = self
            .pieces(color)
            .filter(|p| p.kind == PieceKind::Rook && pawn_files[p.square.file() as usize] == 0)
            .count() as i32;
        unblocked * ROOK_UNBLOCKED_FILE
    }
}
