use super::super::state::Position;
use super::super::types::{CastleSide, Piece, PieceKind, Square};
use super::GenMode;

impl Position {
    pub(super) fn king_targets(&self, piece: &Piece, mode: GenMode, out: &mut Vec<Square>) {
        self.leaper_targets(piece, self.tables.king(piece.square), mode, out);
        if mode == GenMode::Moves {
            self.castling_targets(piece, out);
        }
    }

    /// Castling needs the right, the rook at home, an empty path between king
    /// and rook, and no attack on the king's origin, crossing or destination.
    fn castling_targets(&self, king: &Piece, out: &mut Vec<Square>) {
        let color = king.color;
        let enemy = color.opponent();
        for side in CastleSide::BOTH {
            if !self.castling_rights.has(color, side) {
                continue;
            }
            let path = self.tables.castling(color, side);
            if king.square != path.king_from {
                continue;
            }
            let rook_home = self
                .piece_at(path.rook_from)
                .is_some_and(|p| p.color == color && p.kind == PieceKind::Rook);
            if !rook_home || !path.must_be_empty.iter().all(|&sq| self.is_empty(sq)) {
                continue;
            }
            if path
                .must_not_be_attacked
                .iter()
                .any(|&sq| self.is_square_attacked(sq, enemy))
            {
                continue;
            }
            out.push(path.king_to);
        }
    }
}
