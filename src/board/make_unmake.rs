use super::history::{MoveRecord, Relocation};
use super::state::{EnPassant, Position};
use super::types::{CastleSide, Color, Move, PieceId, PieceKind, Square};

impl Position {
    #[inline]
    fn relocate(&mut self, id: PieceId, from: Square, to: Square) {
        self.board[from.index()] = None;
        self.board[to.index()] = Some(id);
        self.arena[id.index()].square = to;
    }

    /// Apply a move in place and push its undo record.
    ///
    /// The move is not validated; callers pass moves produced by move
    /// generation or checked against it. A pawn reaching the last rank without
    /// a promotion kind becomes a queen. With `track_result` the game result is
    /// updated for the new side to move (checkmate, stalemate, draw rules).
    ///
    /// # Panics
    /// Panics if the origin square is empty.
    #[allow(clippy::too_many_lines)] // One pass over every side effect, mirrored by unmake
    pub fn make_move(&mut self, mv: Move, track_result: bool) {
        let from = mv.from();
        let to = mv.to();
        let mover_id = self.board[from.index()].expect("make_move: origin square is empty");
        let mover = self.arena[mover_id.index()];
        let color = mover.color;

        let mut record = MoveRecord {
            mv,
            primary: Relocation {
                piece: mover_id,
                from,
                to,
            },
            secondary: None,
            captured: None,
            promoted: false,
            prev_result: self.result,
            prev_signature: self.signature,
            prev_en_passant: self.en_passant,
            prev_castling: self.castling_rights,
            prev_halfmove_clock: self.halfmove_clock,
            prev_fullmove_number: self.fullmove_number,
            prev_in_check: self.in_check,
        };

        // En passant captures a pawn that is not on the destination square.
        let mut capture_sq = to;
        if mover.kind == PieceKind::Pawn && from.file() != to.file() && self.is_empty(to) {
            if let Some(ep) = self.en_passant.filter(|ep| ep.target == to) {
                capture_sq = ep.pawn;
            }
        }

        if let Some(victim_id) = self.board[capture_sq.index()] {
            let victim = self.arena[victim_id.index()];
            debug_assert!(victim.color != color, "make_move: capturing own piece");
            self.registries[victim.color.index()].remove(victim_id);
            self.board[capture_sq.index()] = None;
            record.captured = Some(victim);
        }

        self.relocate(mover_id, from, to);

        if mover.kind == PieceKind::King && from.file().abs_diff(to.file()) == 2 {
            let side = if to.file() > from.file() {
                CastleSide::King
            } else {
                CastleSide::Queen
            };
            let path = self.tables.castling(color, side);
            if let Some(rook_id) = self.board[path.rook_from.index()] {
                let (rook_from, rook_to) = (path.rook_from, path.rook_to);
                self.relocate(rook_id, rook_from, rook_to);
                record.secondary = Some(Relocation {
                    piece: rook_id,
                    from: rook_from,
                    to: rook_to,
                });
            }
        }

        if mover.kind == PieceKind::Pawn && to.rank() == color.promotion_rank() {
            let kind = mv.promotion().unwrap_or(PieceKind::Queen);
            self.arena[mover_id.index()].kind = kind;
            record.promoted = true;
        }

        match mover.kind {
            PieceKind::King => self.castling_rights.remove_color(color),
            PieceKind::Rook => {
                for side in CastleSide::BOTH {
                    if from == self.tables.castling(color, side).rook_from {
                        self.castling_rights.remove(color, side);
                    }
                }
            }
            _ => {}
        }
        if let Some(victim) = record.captured.filter(|v| v.kind == PieceKind::Rook) {
            for side in CastleSide::BOTH {
                if capture_sq == self.tables.castling(victim.color, side).rook_from {
                    self.castling_rights.remove(victim.color, side);
                }
            }
        }

        self.en_passant = None;
        if mover.kind == PieceKind::Pawn && self.tables.pawn_double(color, from) == Some(to) {
            let target = Square::at((from.rank() + to.rank()) / 2, from.file());
            self.en_passant = Some(EnPassant { target, pawn: to });
        }

        if mover.kind == PieceKind::Pawn || record.captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        self.side_to_move = color.opponent();
        self.in_check = self.king_attacked(self.side_to_move);
        self.signature = self.compute_signature();
        self.repetitions.increment(self.signature);
        self.history.push(record);

        if track_result {
            self.result = self.detect_result();
        }
    }

    /// Revert the most recent move. Does nothing when no move has been made.
    pub fn unmake_move(&mut self) {
        let Some(record) = self.history.pop() else {
            return;
        };

        self.repetitions.decrement(&self.signature);
        self.signature = record.prev_signature;
        self.side_to_move = self.side_to_move.opponent();
        self.fullmove_number = record.prev_fullmove_number;
        self.en_passant = record.prev_en_passant;
        self.castling_rights = record.prev_castling;
        self.halfmove_clock = record.prev_halfmove_clock;
        self.in_check = record.prev_in_check;
        self.result = record.prev_result;

        let primary = record.primary;
        if record.promoted {
            self.arena[primary.piece.index()].kind = PieceKind::Pawn;
        }
        if let Some(rook) = record.secondary {
            self.relocate(rook.piece, rook.to, rook.from);
        }
        self.relocate(primary.piece, primary.to, primary.from);

        if let Some(victim) = record.captured {
            self.arena[victim.id.index()] = victim;
            self.board[victim.square.index()] = Some(victim.id);
            self.registries[victim.color.index()].insert(victim.id);
        }
    }

    /// The most recently made move, if any.
    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(|record| record.mv)
    }

    /// Moves made since construction, oldest first.
    pub fn moves_played(&self) -> impl Iterator<Item = Move> + '_ {
        self.history.iter().map(|record| record.mv)
    }
}
