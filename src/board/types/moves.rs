//! Packed move representation and its text form.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{PieceKind, PROMOTION_KINDS};
use super::square::Square;
use crate::board::error::MoveParseError;

const ORIGIN_SHIFT: u16 = 9;
const DESTINATION_SHIFT: u16 = 3;
const SQUARE_MASK: u16 = 0x3F;
const PROMOTION_MASK: u16 = 0x7;

/// Compact 15-bit move representation.
///
/// This layout is the interchange contract with external callers and must not
/// change:
/// - bits 9-14: origin square (0-63)
/// - bits 3-8:  destination square (0-63)
/// - bits 0-2:  promotion kind as `PieceKind::index()`, 0 = no promotion
///
/// Castling is encoded as the king's two-file move and en passant as the
/// pawn's diagonal move; both are recognised from the position when made.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move(u16);

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move(((from.as_u8() as u16) << ORIGIN_SHIFT) | ((to.as_u8() as u16) << DESTINATION_SHIFT))
    }

    /// Create a promotion move. A pawn or king promotion kind is stored as-is
    /// and rejected by move generation, never produced by it.
    #[inline]
    #[must_use]
    pub const fn with_promotion(from: Square, to: Square, kind: PieceKind) -> Self {
        Move(Move::new(from, to).0 | kind.index() as u16)
    }

    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        Square::from_index_unchecked(((self.0 >> ORIGIN_SHIFT) & SQUARE_MASK) as u8)
    }

    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        Square::from_index_unchecked(((self.0 >> DESTINATION_SHIFT) & SQUARE_MASK) as u8)
    }

    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<PieceKind> {
        match self.0 & PROMOTION_MASK {
            0 => None,
            code => PieceKind::from_index(code as usize),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.0 & PROMOTION_MASK != 0
    }

    /// Raw packed value
    #[inline]
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// Decode a packed value, validating the promotion field.
    #[must_use]
    pub fn from_u16(value: u16) -> Option<Self> {
        if value >> (ORIGIN_SHIFT + 6) != 0 {
            return None;
        }
        match value & PROMOTION_MASK {
            0..=4 => Some(Move(value)),
            _ => None,
        }
    }

    /// Parse the 4-5 character text form (`e2e4`, `e7e8q`).
    pub fn from_uci(text: &str) -> Result<Self, MoveParseError> {
        text.parse()
    }

    /// Text form of the move.
    #[must_use]
    pub fn to_uci(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.to())?;
        if let Some(kind) = self.promotion() {
            write!(f, "{}", kind.to_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_ascii() || s.len() < 4 || s.len() > 5 {
            return Err(MoveParseError::InvalidLength { len: s.len() });
        }

        let invalid_square = || MoveParseError::InvalidSquare {
            notation: s.to_string(),
        };
        let from: Square = s[0..2].parse().map_err(|_| invalid_square())?;
        let to: Square = s[2..4].parse().map_err(|_| invalid_square())?;

        match s[4..].chars().next() {
            None => Ok(Move::new(from, to)),
            Some(c) => match PieceKind::from_char(c) {
                Some(kind) if c.is_ascii_lowercase() && PROMOTION_KINDS.contains(&kind) => {
                    Ok(Move::with_promotion(from, to, kind))
                }
                _ => Err(MoveParseError::InvalidPromotion { char: c }),
            },
        }
    }
}
