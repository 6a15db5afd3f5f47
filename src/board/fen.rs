use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::state::{EnPassant, Position};
use super::types::{CastleSide, CastlingRights, Color, Move, PieceKind, Square};

/// FEN of the standard initial arrangement.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Position {
    /// Parse a position from FEN notation.
    ///
    /// Placement, side to move, castling and en passant are required; the
    /// halfmove clock and fullmove number default to 0 and 1. Each side must
    /// have exactly one king.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let mut pos = Position::empty();
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRank { rank: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx as u8;
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                    continue;
                }
                let kind = PieceKind::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                if file >= 8 {
                    return Err(FenError::BadFileCount {
                        rank: rank_idx,
                        files: file + 1,
                    });
                }
                pos.add_piece(Square::at(rank, file as u8), color, kind);
                file += 1;
            }
            if file != 8 {
                return Err(FenError::BadFileCount {
                    rank: rank_idx,
                    files: file,
                });
            }
        }

        for color in Color::BOTH {
            let count = pos
                .pieces(color)
                .filter(|p| p.kind == PieceKind::King)
                .count();
            if count != 1 {
                return Err(FenError::KingCount {
                    color: PieceKind::King.to_fen_char(color),
                    count,
                });
            }
        }

        pos.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut rights = CastlingRights::none();
        for c in parts[2].chars() {
            match c {
                'K' => rights.set(Color::White, CastleSide::King),
                'Q' => rights.set(Color::White, CastleSide::Queen),
                'k' => rights.set(Color::Black, CastleSide::King),
                'q' => rights.set(Color::Black, CastleSide::Queen),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }
        pos.castling_rights = rights;

        pos.en_passant = parse_en_passant(&pos, parts[3])?;

        if let Some(clock) = parts.get(4) {
            pos.halfmove_clock = clock.parse().map_err(|_| FenError::InvalidCounter {
                found: (*clock).to_string(),
            })?;
        }
        if let Some(number) = parts.get(5) {
            pos.fullmove_number = number.parse().map_err(|_| FenError::InvalidCounter {
                found: (*number).to_string(),
            })?;
        }

        pos.finish_setup();
        Ok(pos)
    }

    /// Parse a position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                match self.piece_at(Square::at(rank, file)) {
                    Some(piece) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(piece.kind.to_fen_char(piece.color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        let ep = self
            .en_passant
            .map_or_else(|| "-".to_string(), |ep| ep.target.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            self.castling_rights.to_fen(),
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Resolve move text (`e2e4`, `e7e8q`) against the legal moves of the
    /// side to move.
    ///
    /// A pawn move to the last rank without a promotion letter means a queen.
    ///
    /// # Example
    /// ```
    /// use kestrel_chess::board::Position;
    ///
    /// let mut pos = Position::new();
    /// let mv = pos.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_move(&mut self, text: &str) -> Result<Move, MoveParseError> {
        let parsed = Move::from_uci(text)?;
        let promotes = !parsed.is_promotion()
            && self.piece_at(parsed.from()).is_some_and(|p| {
                p.kind == PieceKind::Pawn && parsed.to().rank() == p.color.promotion_rank()
            });
        let wanted = if promotes {
            Move::with_promotion(parsed.from(), parsed.to(), PieceKind::Queen)
        } else {
            parsed
        };

        let mover = self
            .piece_at(wanted.from())
            .filter(|p| p.color == self.side_to_move)
            .map(|p| p.id);
        let legal = mover.is_some_and(|id| self.generate_legal_moves(id).contains(&wanted));
        if legal {
            Ok(wanted)
        } else {
            Err(MoveParseError::IllegalMove {
                notation: text.to_string(),
            })
        }
    }

    /// Parse move text and make it with result tracking.
    pub fn make_move_uci(&mut self, text: &str) -> Result<Move, MoveParseError> {
        let mv = self.parse_move(text)?;
        self.make_move(mv, true);
        Ok(mv)
    }
}

/// The en-passant field names the square passed over; the capturable pawn
/// stands one rank beyond it from the side to move's point of view. The
/// field is only accepted when that pawn is there and both the target and
/// the pawn's origin square are empty.
fn parse_en_passant(pos: &Position, field: &str) -> Result<Option<EnPassant>, FenError> {
    if field == "-" {
        return Ok(None);
    }
    let invalid = || FenError::InvalidEnPassant {
        found: field.to_string(),
    };
    let target: Square = field.parse().map_err(|_| invalid())?;
    let (expected_rank, pawn_offset) = match pos.side_to_move {
        Color::White => (5, -1),
        Color::Black => (2, 1),
    };
    if target.rank() != expected_rank {
        return Err(invalid());
    }
    let pawn = target.offset(pawn_offset, 0).ok_or_else(invalid)?;
    let origin = target.offset(-pawn_offset, 0).ok_or_else(invalid)?;

    let pushed_pawn = pos
        .piece_at(pawn)
        .is_some_and(|p| p.kind == PieceKind::Pawn && p.color != pos.side_to_move);
    if !pushed_pawn || !pos.is_empty(target) || !pos.is_empty(origin) {
        return Err(invalid());
    }
    Ok(Some(EnPassant { target, pawn }))
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::try_from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fen_round_trip() {
        let pos = Position::try_from_fen(START_FEN).unwrap();
        assert_eq!(pos.to_fen(), START_FEN);
        assert_eq!(pos, Position::new());
    }

    #[test]
    fn test_fen_round_trip_with_counters() {
        let fen = "r3k2r/8/8/3pP3/8/8/8/R3K2R w Kq d6 3 27";
        assert_eq!(Position::from_fen(fen).to_fen(), fen);
    }

    #[test]
    fn test_fen_black_to_move() {
        let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
        let pos = Position::try_from_fen(fen).unwrap();
        assert_eq!(pos.side_to_move(), Color::Black);
        let ep = pos.en_passant().unwrap();
        assert_eq!(ep.target.to_string(), "e3");
        assert_eq!(ep.pawn.to_string(), "e4");
    }

    #[test]
    fn test_fen_defaults_counters() {
        let pos = Position::try_from_fen("4k3/8/8/8/8/8/8/4K3 w - -").unwrap();
        assert_eq!(pos.halfmove_clock(), 0);
        assert_eq!(pos.fullmove_number(), 1);
    }

    #[test]
    fn test_fen_error_too_few_parts() {
        let result = Position::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w");
        assert!(matches!(result, Err(FenError::TooFewParts { found: 2 })));
    }

    #[test]
    fn test_fen_error_invalid_piece() {
        let result =
            Position::try_from_fen("rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidPiece { char: 'x' })));
    }

    #[test]
    fn test_fen_error_short_rank() {
        let result =
            Position::try_from_fen("rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(matches!(result, Err(FenError::BadFileCount { rank: 1, files: 7 })));
    }

    #[test]
    fn test_fen_error_rank_count() {
        let result =
            Position::try_from_fen("rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidRank { rank: 7 })));
    }

    #[test]
    fn test_fen_error_missing_king() {
        let result = Position::try_from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1");
        assert!(matches!(
            result,
            Err(FenError::KingCount { color: 'k', count: 0 })
        ));
    }

    #[test]
    fn test_fen_error_invalid_side_to_move() {
        let result =
            Position::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidSideToMove { .. })));
    }

    #[test]
    fn test_fen_error_invalid_castling() {
        let result =
            Position::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w XQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidCastling { char: 'X' })));
    }

    #[test]
    fn test_fen_error_invalid_en_passant() {
        for field in ["z9", "e4"] {
            let fen = format!("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq {field} 0 1");
            let result = Position::try_from_fen(&fen);
            assert!(matches!(result, Err(FenError::InvalidEnPassant { .. })), "{field}");
        }
    }

    #[test]
    fn test_fen_en_passant_requires_pushed_pawn() {
        let rejected = [
            // Nothing on e5 to capture
            "4k3/8/8/3P4/8/8/8/4K3 w - e6 0 1",
            // Own pawn on e5
            "4k3/8/8/3PP3/8/8/8/4K3 w - e6 0 1",
            // Target square occupied
            "4k3/8/4n3/3Pp3/8/8/8/4K3 w - e6 0 1",
            // The pawn could not have come from e7
            "4k3/4p3/8/3Pp3/8/8/8/4K3 w - e6 0 1",
        ];
        for fen in rejected {
            let result = Position::try_from_fen(fen);
            assert!(matches!(result, Err(FenError::InvalidEnPassant { .. })), "{fen}");
        }

        let mut pos = Position::from_fen("4k3/8/8/3Pp3/8/8/8/4K3 w - e6 0 1");
        assert!(pos.en_passant().is_some());
        assert!(pos.legal_moves().contains(&"d5e6".parse().unwrap()));
    }

    #[test]
    fn test_fen_without_en_passant_pawn_has_no_phantom_capture() {
        let mut pos = Position::from_fen("4k3/8/8/3P4/8/8/8/4K3 w - - 0 1");
        assert_eq!(pos.perft(1), 6);
        assert!(!pos.legal_moves().contains(&"d5e6".parse().unwrap()));
    }

    #[test]
    fn test_fen_error_invalid_counter() {
        let result = Position::try_from_fen("4k3/8/8/8/8/8/8/4K3 w - - x 1");
        assert!(matches!(result, Err(FenError::InvalidCounter { .. })));
    }

    #[test]
    fn test_fen_partial_castling() {
        let pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1");
        let rights = pos.castling_rights();
        assert!(rights.has(Color::White, CastleSide::King));
        assert!(!rights.has(Color::White, CastleSide::Queen));
        assert!(!rights.has(Color::Black, CastleSide::King));
        assert!(rights.has(Color::Black, CastleSide::Queen));
    }

    #[test]
    fn test_fen_detects_check() {
        let pos = Position::from_fen("4k3/8/8/8/8/8/8/R3K2r w - - 0 1");
        assert!(pos.in_check());
    }

    #[test]
    fn test_parse_move_e2e4() {
        let mut pos = Position::new();
        let mv = pos.parse_move("e2e4").unwrap();
        assert_eq!(mv.from(), Square::new(1, 4).unwrap());
        assert_eq!(mv.to(), Square::new(3, 4).unwrap());
    }

    #[test]
    fn test_parse_move_promotion() {
        let mut pos = Position::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
        let mv = pos.parse_move("a7a8n").unwrap();
        assert_eq!(mv.promotion(), Some(PieceKind::Knight));
    }

    #[test]
    fn test_parse_move_missing_promotion_means_queen() {
        let mut pos = Position::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
        let mv = pos.parse_move("a7a8").unwrap();
        assert_eq!(mv.promotion(), Some(PieceKind::Queen));
    }

    #[test]
    fn test_parse_move_error_invalid_length() {
        let mut pos = Position::new();
        assert!(matches!(
            pos.parse_move("e2"),
            Err(MoveParseError::InvalidLength { len: 2 })
        ));
    }

    #[test]
    fn test_parse_move_error_invalid_square() {
        let mut pos = Position::new();
        assert!(matches!(
            pos.parse_move("z9z9"),
            Err(MoveParseError::InvalidSquare { .. })
        ));
    }

    #[test]
    fn test_parse_move_error_illegal() {
        let mut pos = Position::new();
        assert!(matches!(
            pos.parse_move("e2e5"),
            Err(MoveParseError::IllegalMove { .. })
        ));
        // Right piece geometry, wrong side to move.
        assert!(matches!(
            pos.parse_move("e7e5"),
            Err(MoveParseError::IllegalMove { .. })
        ));
    }

    #[test]
    fn test_parse_move_error_invalid_promotion() {
        let mut pos = Position::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
        assert!(matches!(
            pos.parse_move("a7a8p"),
            Err(MoveParseError::InvalidPromotion { char: 'p' })
        ));
    }

    #[test]
    fn test_from_str_trait() {
        let pos: Position = START_FEN.parse().unwrap();
        assert_eq!(pos.side_to_move(), Color::White);
    }

    #[test]
    fn test_make_move_uci() {
        let mut pos = Position::new();
        pos.make_move_uci("e2e4").unwrap();
        assert_eq!(pos.side_to_move(), Color::Black);
        assert_eq!(
            pos.to_fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
        );
    }
}
