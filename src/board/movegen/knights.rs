use super::super::state::Position;
use super::super::types::{Piece, Square};
use super::GenMode;

impl Position {
    pub(super) fn knight_targets(&self, piece: &Piece, mode: GenMode, out: &mut Vec<Square>) {
        self.leaper_targets(piece, self.tables.knight(piece.square), mode, out);
    }

    /// Table destinations, minus same-color occupants in `Moves` mode.
    pub(super) fn leaper_targets(
        &self,
        piece: &Piece,
        table: &[Square],
        mode: GenMode,
        out: &mut Vec<Square>,
    ) {
        out.extend(table.iter().copied().filter(|&to| {
            mode == GenMode::Attacks || self.piece_at(to).map_or(true, |p| p.color != piece.color)
        }));
    }
}
