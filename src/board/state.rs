use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::history::{MoveRecord, PositionSignature, RepetitionLedger, NO_EN_PASSANT};
use super::tables::MoveTables;
use super::types::{CastlingRights, Color, Piece, PieceId, PieceKind, Square};

/// Final outcome of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameResult {
    WhiteWins,
    BlackWins,
    Draw,
}

impl GameResult {
    #[must_use]
    pub const fn win_for(color: Color) -> Self {
        match color {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }

    /// Winning color, `None` for a draw.
    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameResult::WhiteWins => Some(Color::White),
            GameResult::BlackWins => Some(Color::Black),
            GameResult::Draw => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::WhiteWins => write!(f, "1-0"),
            GameResult::BlackWins => write!(f, "0-1"),
            GameResult::Draw => write!(f, "1/2-1/2"),
        }
    }
}

/// En-passant opportunity left by a double pawn advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EnPassant {
    /// Square passed over, where the capturing pawn lands
    pub target: Square,
    /// Square of the pawn that can be captured
    pub pawn: Square,
}

/// Live pieces of one color, as a set of arena ids plus an incrementally
/// maintained count. Iteration is in ascending id order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Registry {
    ids: u64,
    count: u8,
}

impl Registry {
    #[inline]
    pub(crate) fn insert(&mut self, id: PieceId) {
        debug_assert!(self.ids & (1u64 << id.0) == 0, "piece {id:?} already registered");
        self.ids |= 1u64 << id.0;
        self.count += 1;
    }

    #[inline]
    pub(crate) fn remove(&mut self, id: PieceId) {
        debug_assert!(self.ids & (1u64 << id.0) != 0, "piece {id:?} not registered");
        self.ids &= !(1u64 << id.0);
        self.count -= 1;
    }

    #[inline]
    pub(crate) fn len(self) -> usize {
        self.count as usize
    }

    #[inline]
    pub(crate) fn iter(self) -> RegistryIter {
        RegistryIter(self.ids)
    }
}

pub(crate) struct RegistryIter(u64);

impl Iterator for RegistryIter {
    type Item = PieceId;

    fn next(&mut self) -> Option<PieceId> {
        if self.0 == 0 {
            return None;
        }
        let idx = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Some(PieceId(idx))
    }
}

/// A chess position with its full undo history.
///
/// Pieces live in an arena addressed by `PieceId`; board cells and per-color
/// registries only hold ids. The position is mutated in place: every
/// `make_move` must be paired with an `unmake_move` in reverse order.
#[derive(Clone, Debug)]
pub struct Position {
    pub(crate) tables: &'static MoveTables,
    pub(crate) arena: Vec<Piece>,
    pub(crate) board: [Option<PieceId>; 64],
    pub(crate) registries: [Registry; 2],
    pub(crate) kings: [Option<PieceId>; 2],
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant: Option<EnPassant>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) in_check: bool,
    pub(crate) result: Option<GameResult>,
    pub(crate) signature: PositionSignature,
    pub(crate) repetitions: RepetitionLedger,
    pub(crate) history: Vec<MoveRecord>,
}

impl Position {
    /// The standard initial arrangement.
    #[must_use]
    pub fn new() -> Self {
        let mut pos = Position::empty();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for color in Color::BOTH {
            for (file, kind) in back_rank.iter().enumerate() {
                pos.add_piece(Square::at(color.back_rank(), file as u8), color, *kind);
            }
            for file in 0..8 {
                pos.add_piece(Square::at(color.pawn_start_rank(), file), color, PieceKind::Pawn);
            }
        }
        pos.castling_rights = CastlingRights::all();
        pos.finish_setup();
        pos
    }

    pub(crate) fn empty() -> Self {
        Position {
            tables: MoveTables::get(),
            arena: Vec::with_capacity(32),
            board: [None; 64],
            registries: [Registry::default(); 2],
            kings: [None; 2],
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            in_check: false,
            result: None,
            signature: PositionSignature([0; 34]),
            repetitions: RepetitionLedger::new(),
            history: Vec::new(),
        }
    }

    /// Place a new piece during setup. The caller guarantees the square is empty.
    pub(crate) fn add_piece(&mut self, square: Square, color: Color, kind: PieceKind) -> PieceId {
        let id = PieceId(self.arena.len() as u8);
        self.arena.push(Piece {
            id,
            kind,
            color,
            square,
        });
        self.board[square.index()] = Some(id);
        self.registries[color.index()].insert(id);
        if kind == PieceKind::King {
            self.kings[color.index()] = Some(id);
        }
        id
    }

    /// Derive check status, signature and result, and record the initial
    /// occurrence.
    pub(crate) fn finish_setup(&mut self) {
        self.in_check = self.king_attacked(self.side_to_move);
        self.signature = self.compute_signature();
        self.repetitions.increment(self.signature);
        self.result = self.detect_result();
    }

    pub(crate) fn compute_signature(&self) -> PositionSignature {
        let mut bytes = [0u8; 34];
        for (idx, cell) in self.board.iter().enumerate() {
            if let Some(id) = cell {
                let piece = &self.arena[id.index()];
                let code = (piece.color.index() * 6 + piece.kind.index() + 1) as u8;
                bytes[idx / 2] |= code << ((idx % 2) * 4);
            }
        }
        bytes[32] = self.side_to_move.index() as u8 | (self.castling_rights.as_u8() << 1);
        bytes[33] = self.en_passant.map_or(NO_EN_PASSANT, |ep| ep.target.as_u8());
        PositionSignature(bytes)
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.arena[id.index()]
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<&Piece> {
        self.board[sq.index()].map(|id| &self.arena[id.index()])
    }

    #[inline]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.board[sq.index()].is_none()
    }

    /// Live pieces of `color`, in ascending id order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.registries[color.index()]
            .iter()
            .map(move |id| &self.arena[id.index()])
    }

    /// Number of live pieces of `color`, kings included.
    #[inline]
    #[must_use]
    pub fn piece_count(&self, color: Color) -> usize {
        self.registries[color.index()].len()
    }

    #[inline]
    #[must_use]
    pub fn king(&self, color: Color) -> Option<&Piece> {
        self.kings[color.index()].map(|id| &self.arena[id.index()])
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    #[must_use]
    pub fn en_passant(&self) -> Option<EnPassant> {
        self.en_passant
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Whether the side to move is in check.
    #[inline]
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.in_check
    }

    #[inline]
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    #[inline]
    #[must_use]
    pub fn signature(&self) -> PositionSignature {
        self.signature
    }

    /// How often the current position has occurred.
    #[must_use]
    pub fn repetition_count(&self) -> u32 {
        self.repetitions.get(&self.signature)
    }

    /// Number of plies applied since construction.
    #[inline]
    #[must_use]
    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    /// Checkmate: in check with no legal move.
    pub fn is_checkmate(&mut self) -> bool {
        self.in_check && !self.has_legal_move()
    }

    /// Stalemate: not in check and no legal move.
    pub fn is_stalemate(&mut self) -> bool {
        !self.in_check && !self.has_legal_move()
    }

    /// 50-move rule, threefold repetition, stalemate or insufficient material.
    pub fn is_draw(&mut self) -> bool {
        self.is_draw_by_rule() || self.is_stalemate()
    }

    /// The draw conditions that do not need move generation.
    #[must_use]
    pub fn is_draw_by_rule(&self) -> bool {
        self.halfmove_clock >= 100
            || self.repetition_count() >= 3
            || self.is_insufficient_material()
    }

    /// King vs king, king and one minor vs king, or only bishops that all
    /// stand on squares of one color.
    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        let total = self.piece_count(Color::White) + self.piece_count(Color::Black);
        if total <= 2 {
            return true;
        }

        let mut minors = 0;
        let mut knights = 0;
        let mut light_bishops = 0;
        let mut dark_bishops = 0;
        for color in Color::BOTH {
            for piece in self.pieces(color) {
                match piece.kind {
                    PieceKind::King => {}
                    PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
                    PieceKind::Knight => {
                        minors += 1;
                        knights += 1;
                    }
                    PieceKind::Bishop => {
                        minors += 1;
                        if piece.square.is_light() {
                            light_bishops += 1;
                        } else {
                            dark_bishops += 1;
                        }
                    }
                }
            }
        }

        if minors <= 1 {
            return true;
        }
        knights == 0 && (light_bishops == 0 || dark_bishops == 0)
    }

    /// Decide the game result of the current position, if it is final.
    pub(crate) fn detect_result(&mut self) -> Option<GameResult> {
        if !self.has_legal_move() {
            return Some(if self.in_check {
                GameResult::win_for(self.side_to_move.opponent())
            } else {
                GameResult::Draw
            });
        }
        if self.is_draw_by_rule() {
            return Some(GameResult::Draw);
        }
        None
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

/// Observational equality: all mutable state, ignoring the shared tables.
impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.arena == other.arena
            && self.board == other.board
            && self.registries == other.registries
            && self.kings == other.kings
            && self.side_to_move == other.side_to_move
            && self.castling_rights == other.castling_rights
            && self.en_passant == other.en_passant
            && self.halfmove_clock == other.halfmove_clock
            && self.fullmove_number == other.fullmove_number
            && self.in_check == other.in_check
            && self.result == other.result
            && self.signature == other.signature
            && self.repetitions == other.repetitions
            && self.history == other.history
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            for file in 0..8 {
                let c = self
                    .piece_at(Square::at(rank, file))
                    .map_or('.', |p| p.kind.to_fen_char(p.color));
                write!(f, "{c} ")?;
            }
            writeln!(f, "{}", rank + 1)?;
        }
        write!(f, "a b c d e f g h")
    }
}
