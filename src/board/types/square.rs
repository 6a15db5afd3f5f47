//! Square type and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square index 0-63: bits 3-5 hold the rank, bits 0-2 the file
/// (a1 = 0, b1 = 1, ..., h8 = 63).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    /// Create a square from rank and file, with bounds checking
    #[must_use]
    pub const fn new(rank: u8, file: u8) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square((rank << 3) | file))
        } else {
            None
        }
    }

    /// Create a square from an index, with bounds checking
    #[must_use]
    pub const fn from_index(idx: u8) -> Option<Self> {
        if idx < 64 {
            Some(Square(idx))
        } else {
            None
        }
    }

    /// Callers guarantee `rank < 8 && file < 8`.
    #[inline]
    #[must_use]
    pub(crate) const fn at(rank: u8, file: u8) -> Self {
        Square((rank << 3) | (file & 7))
    }

    /// Callers guarantee `idx < 64`.
    #[inline]
    #[must_use]
    pub(crate) const fn from_index_unchecked(idx: u8) -> Self {
        Square(idx & 63)
    }

    /// Rank 0-7, where 0 = rank 1
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0 >> 3
    }

    /// File 0-7, where 0 = file a
    #[inline]
    #[must_use]
    pub const fn file(self) -> u8 {
        self.0 & 7
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// True for light squares (h1, a2, ...).
    #[inline]
    #[must_use]
    pub const fn is_light(self) -> bool {
        (self.rank() + self.file()) % 2 == 1
    }

    /// Offset by rank/file deltas, `None` when leaving the board.
    #[must_use]
    pub fn offset(self, d_rank: i8, d_file: i8) -> Option<Square> {
        let rank = self.rank() as i8 + d_rank;
        let file = self.file() as i8 + d_file;
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Square::at(rank as u8, file as u8))
        } else {
            None
        }
    }

    /// King-move distance between two squares.
    #[inline]
    #[must_use]
    pub fn distance(self, other: Square) -> u8 {
        let dr = self.rank().abs_diff(other.rank());
        let df = self.file().abs_diff(other.file());
        dr.max(df)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.file() + b'a') as char, self.rank() + 1)
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = SquareError;

    fn try_from((rank, file): (u8, u8)) -> Result<Self, Self::Error> {
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        Ok(Square::at(rank, file))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            });
        }

        match (bytes[0], bytes[1]) {
            (f @ b'a'..=b'h', r @ b'1'..=b'8') => Ok(Square::at(r - b'1', f - b'a')),
            _ => Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            }),
        }
    }
}
