//! Undo records and the repetition ledger.

use std::collections::HashMap;

use super::state::{EnPassant, GameResult};
use super::types::{CastlingRights, Move, Piece, PieceId, Square};

/// Canonical encoding of board contents, side to move, castling rights and
/// en-passant target. Two positions compare equal exactly when they are the
/// same position for repetition purposes.
///
/// Layout: bytes 0-31 hold one nibble per square (0 = empty, otherwise
/// `color * 6 + kind + 1`), byte 32 the side to move in bit 0 and the castling
/// mask in bits 1-4, byte 33 the en-passant target or `NO_EN_PASSANT`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionSignature(pub(crate) [u8; 34]);

pub(crate) const NO_EN_PASSANT: u8 = 0xFF;

impl std::fmt::Debug for PositionSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct RepetitionLedger {
    counts: HashMap<PositionSignature, u32>,
}

impl RepetitionLedger {
    pub(crate) fn new() -> Self {
        RepetitionLedger {
            counts: HashMap::new(),
        }
    }

    pub(crate) fn get(&self, signature: &PositionSignature) -> u32 {
        self.counts.get(signature).copied().unwrap_or(0)
    }

    pub(crate) fn increment(&mut self, signature: PositionSignature) -> u32 {
        let count = self.counts.entry(signature).or_insert(0);
        *count += 1;
        *count
    }

    /// Entries reaching zero are removed so that undo leaves no trace.
    pub(crate) fn decrement(&mut self, signature: &PositionSignature) {
        if let Some(count) = self.counts.get_mut(signature) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(signature);
            }
        }
    }
}

/// One piece moved from `from` to `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Relocation {
    pub(crate) piece: PieceId,
    pub(crate) from: Square,
    pub(crate) to: Square,
}

/// Everything needed to revert one applied move exactly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct MoveRecord {
    pub(crate) mv: Move,
    pub(crate) primary: Relocation,
    /// The rook of a castling move
    pub(crate) secondary: Option<Relocation>,
    pub(crate) captured: Option<Piece>,
    pub(crate) promoted: bool,
    pub(crate) prev_result: Option<GameResult>,
    pub(crate) prev_signature: PositionSignature,
    pub(crate) prev_en_passant: Option<EnPassant>,
    pub(crate) prev_castling: CastlingRights,
    pub(crate) prev_halfmove_clock: u32,
    pub(crate) prev_fullmove_number: u32,
    pub(crate) prev_in_check: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_decrement_removes_entry() {
        let sig = PositionSignature([1; 34]);
        let mut ledger = RepetitionLedger::new();
        let empty = ledger.clone();

        assert_eq!(ledger.increment(sig), 1);
        assert_eq!(ledger.increment(sig), 2);
        ledger.decrement(&sig);
        assert_eq!(ledger.get(&sig), 1);
        ledger.decrement(&sig);
        assert_eq!(ledger.get(&sig), 0);
        assert_eq!(ledger, empty);
    }

    #[test]
    fn test_ledger_decrement_unknown_is_noop() {
        let mut ledger = RepetitionLedger::new();
        ledger.decrement(&PositionSignature([7; 34]));
        assert_eq!(ledger, RepetitionLedger::new());
    }
}
