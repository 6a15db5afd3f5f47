use super::super::state::Position;
use super::super::types::{Piece, Square};
use super::GenMode;

impl Position {
    pub(super) fn pawn_targets(&self, piece: &Piece, mode: GenMode, out: &mut Vec<Square>) {
        let color = piece.color;
        let captures = self.tables.pawn_captures(color, piece.square);

        if mode == GenMode::Attacks {
            out.extend_from_slice(captures);
            return;
        }

        if let Some(one) = self.tables.pawn_advance(color, piece.square) {
            if self.is_empty(one) {
                out.push(one);
                if let Some(two) = self.tables.pawn_double(color, piece.square) {
                    if self.is_empty(two) {
                        out.push(two);
                    }
                }
            }
        }

        let ep_target = self.en_passant.map(|ep| ep.target);
        for &to in captures {
            let enemy = self.piece_at(to).is_some_and(|p| p.color != color);
            if enemy || ep_target == Some(to) {
                out.push(to);
            }
        }
    }
}
