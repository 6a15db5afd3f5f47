//! Pseudo-legal and legal move generation, attack detection and perft.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::state::Position;
use super::tables::{DIAGONAL, ORTHOGONAL};
use super::types::{Color, Move, PieceId, PieceKind, Square, PROMOTION_KINDS};

/// What pseudo-move generation reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenMode {
    /// Quiet moves and captures the piece could play, castling included.
    Moves,
    /// Squares the piece attacks or defends, whatever stands on them.
    Attacks,
}

impl Position {
    /// Destination squares of one piece, ignoring whether its own king would
    /// be left in check.
    #[must_use]
    pub fn generate_pseudo_moves(&self, id: PieceId, mode: GenMode) -> Vec<Square> {
        let piece = *self.piece(id);
        let mut targets = Vec::with_capacity(16);
        match piece.kind {
            PieceKind::Pawn => self.pawn_targets(&piece, mode, &mut targets),
            PieceKind::Knight => self.knight_targets(&piece, mode, &mut targets),
            PieceKind::Bishop => self.slider_targets(&piece, DIAGONAL, mode, &mut targets),
            PieceKind::Rook => self.slider_targets(&piece, ORTHOGONAL, mode, &mut targets),
            PieceKind::Queen => self.slider_targets(&piece, 0..8, mode, &mut targets),
            PieceKind::King => self.king_targets(&piece, mode, &mut targets),
        }
        targets
    }

    /// Legal moves of one piece. Each pseudo destination is tried on the
    /// position and kept if the mover's king is safe afterwards; promotions
    /// expand to one move per promotion kind, queen first.
    pub fn generate_legal_moves(&mut self, id: PieceId) -> Vec<Move> {
        let piece = *self.piece(id);
        let mut moves = Vec::new();
        for to in self.generate_pseudo_moves(id, GenMode::Moves) {
            let promotes =
                piece.kind == PieceKind::Pawn && to.rank() == piece.color.promotion_rank();
            let mv = if promotes {
                Move::with_promotion(piece.square, to, PieceKind::Queen)
            } else {
                Move::new(piece.square, to)
            };
            if !self.is_legal_for(mv, piece.color) {
                continue;
            }
            if promotes {
                moves.extend(
                    PROMOTION_KINDS
                        .iter()
                        .map(|&kind| Move::with_promotion(piece.square, to, kind)),
                );
            } else {
                moves.push(mv);
            }
        }
        moves
    }

    /// All legal moves of the side to move, grouped by piece in ascending id order.
    pub fn legal_moves(&mut self) -> Vec<Move> {
        let registry = self.registries[self.side_to_move.index()];
        let mut moves = Vec::with_capacity(48);
        for id in registry.iter() {
            moves.extend(self.generate_legal_moves(id));
        }
        moves
    }

    /// Whether the side to move has any legal move. Stops at the first one.
    pub fn has_legal_move(&mut self) -> bool {
        let color = self.side_to_move;
        let registry = self.registries[color.index()];
        for id in registry.iter() {
            let from = self.piece(id).square;
            for to in self.generate_pseudo_moves(id, GenMode::Moves) {
                if self.is_legal_for(Move::new(from, to), color) {
                    return true;
                }
            }
        }
        false
    }

    fn is_legal_for(&mut self, mv: Move, color: Color) -> bool {
        self.make_move(mv, false);
        let legal = !self.king_attacked(color);
        self.unmake_move();
        legal
    }

    /// Whether any piece of color `by` attacks `sq`.
    ///
    /// Works backwards from the target: a leaper of `by` attacks `sq` iff it
    /// stands on a square the same leaper would reach from `sq`, and a slider
    /// iff it is the first piece met along a ray of its kind.
    #[must_use]
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        let holds = |sq: Square, kinds: &[PieceKind]| {
            self.piece_at(sq)
                .is_some_and(|p| p.color == by && kinds.contains(&p.kind))
        };

        if self
            .tables
            .knight(sq)
            .iter()
            .any(|&from| holds(from, &[PieceKind::Knight]))
        {
            return true;
        }
        if self
            .tables
            .king(sq)
            .iter()
            .any(|&from| holds(from, &[PieceKind::King]))
        {
            return true;
        }
        if self
            .tables
            .pawn_captures(by.opponent(), sq)
            .iter()
            .any(|&from| holds(from, &[PieceKind::Pawn]))
        {
            return true;
        }

        let rays = [
            (ORTHOGONAL, [PieceKind::Rook, PieceKind::Queen]),
            (DIAGONAL, [PieceKind::Bishop, PieceKind::Queen]),
        ];
        for (dirs, kinds) in rays {
            for dir in dirs {
                let blocker = self
                    .tables
                    .ray(sq, dir)
                    .iter()
                    .copied()
                    .find(|&s| !self.is_empty(s));
                if blocker.is_some_and(|s| holds(s, &kinds)) {
                    return true;
                }
            }
        }
        false
    }

    /// Whether `color`'s king is attacked. False when it has no king.
    #[must_use]
    pub fn king_attacked(&self, color: Color) -> bool {
        self.king(color)
            .is_some_and(|king| self.is_square_attacked(king.square, color.opponent()))
    }

    /// Count leaf nodes of the legal move tree to `depth` plies.
    pub fn perft(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }
        let mut nodes = 0;
        for mv in moves {
            self.make_move(mv, false);
            nodes += self.perft(depth - 1);
            self.unmake_move();
        }
        nodes
    }
}
