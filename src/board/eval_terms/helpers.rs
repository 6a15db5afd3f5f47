//! Helper methods for evaluation.
//!
//! Contains the attack computation shared by several evaluation terms.

use crate::board::movegen::GenMode;
use crate::board::state::Position;
use crate::board::types::{Color, PieceKind, Square};

use super::tables::ENDGAME_MATERIAL_LIMIT;

/// Attackers of every square, per color.
///
/// Built once per evaluation from `Attacks`-mode generation, so defended
/// squares are included. Each list is sorted by ascending piece value.
#[derive(Debug, Clone)]
pub struct AttackMap {
    attackers: [[Vec<PieceKind>; 64]; 2],
}

impl AttackMap {
    /// Kinds of `color`'s pieces attacking `sq`, cheapest first.
    #[inline]
    #[must_use]
    pub fn attackers(&self, color: Color, sq: Square) -> &[PieceKind] {
        &self.attackers[color.index()][sq.index()]
    }

    #[inline]
    #[must_use]
    pub fn is_attacked(&self, color: Color, sq: Square) -> bool {
        !self.attackers[color.index()][sq.index()].is_empty()
    }

    /// Every (square, attackers) pair of `color`.
    pub fn iter(&self, color: Color) -> impl Iterator<Item = (Square, &[PieceKind])> + '_ {
        self.attackers[color.index()]
            .iter()
            .enumerate()
            .filter(|(_, kinds)| !kinds.is_empty())
            .map(|(idx, kinds)| (Square::from_index_unchecked(idx as u8), kinds.as_slice()))
    }
}

impl Position {
    /// Compute the attack map for both colors.
    #[must_use]
    pub fn compute_attack_map(&self) -> AttackMap {
        let mut attackers: [[Vec<PieceKind>; 64]; 2] =
            std::array::from_fn(|_| std::array::from_fn(|_| Vec::new()));
        for color in Color::BOTH {
            for piece in self.pieces(color) {
                for sq in self.generate_pseudo_moves(piece.id, GenMode::Attacks) {
                    attackers[color.index()][sq.index()].push(piece.kind);
                }
            }
        }
        for kinds in attackers.iter_mut().flatten() {
            kinds.sort_by_key(|kind| kind.value());
        }
        AttackMap { attackers }
    }

    /// Endgame phase: no queens left, or both sides down to light material.
    #[must_use]
    pub fn is_endgame(&self) -> bool {
        let mut queens = 0;
        let mut heavy = [0i32; 2];
        for color in Color::BOTH {
            for piece in self.pieces(color) {
                match piece.kind {
                    PieceKind::Pawn | PieceKind::King => {}
                    kind => {
                        if kind == PieceKind::Queen {
                            queens += 1;
                        }
                        heavy[color.index()] += kind.value();
                    }
                }
            }
        }
        queens == 0 || heavy.iter().all(|&material| material <= ENDGAME_MATERIAL_LIMIT)
    }

    /// Files (a..h) holding at least one pawn of `color`, with pawn counts.
    pub(super) fn pawn_files(&self, color: Color) -> [u8; 8] {
        let mut files = [0u8; 8];
        for piece in self.pieces(color).filter(|p| p.kind == PieceKind::Pawn) {
            files[piece.square.file() as usize] += 1;
        }
        files
    }
}
