//! Hanging pieces evaluation.
//!
//! Estimates what each attacked piece would lose to a capture sequence on its
//! square, using the attackers and defenders known before the exchange starts.
//! Pieces uncovered by a capture are not added.

use crate::board::state::Position;
use crate::board::types::{Color, PieceKind};

use super::helpers::AttackMap;
use super::tables::{HANGING_WEIGHT_OUR_MOVE, HANGING_WEIGHT_THEIR_MOVE};

impl Position {
    /// Penalty (zero or negative) for `color`'s pieces that lose material to
    /// an exchange. Counts more when the opponent is the side to move.
    #[must_use]
    pub fn eval_hanging(&self, color: Color, attacks: &AttackMap) -> i32 {
        let enemy = color.opponent();
        let weight = if self.side_to_move == enemy {
            HANGING_WEIGHT_THEIR_MOVE
        } else {
            HANGING_WEIGHT_OUR_MOVE
        };

        let mut loss = 0;
        for piece in self.pieces(color).filter(|p| p.kind != PieceKind::King) {
            if !attacks.is_attacked(enemy, piece.square) {
                continue;
            }
            let attackers = attacks.attackers(enemy, piece.square);
            let defenders = attacks.attackers(color, piece.square);
            loss += exchange_gain(piece.kind.value(), attackers, defenders).max(0);
        }
        -(loss * weight / 100)
    }
}

/// Net material the attacking side wins on one square when both sides capture
/// cheapest piece first and either side may stop whenever continuing would
/// cost it. `attackers` and `defenders` must be sorted by ascending value.
fn exchange_gain(target: i32, attackers: &[PieceKind], defenders: &[PieceKind]) -> i32 {
    let Some(first) = attackers.first() else {
        return 0;
    };

    // gains[d]: material balance for the side making capture d, if the
    // exchange stopped right after it.
    let mut gains = vec![target];
    let mut on_square = first.value();
    let mut next_attacker = 1;
    let mut next_defender = 0;
    let mut defenders_turn = true;
    loop {
        let capturer = if defenders_turn {
            defenders.get(next_defender)
        } else {
            attackers.get(next_attacker)
        };
        let Some(capturer) = capturer else {
            break;
        };
        let previous = gains[gains.len() - 1];
        gains.push(on_square - previous);
        on_square = capturer.value();
        if defenders_turn {
            next_defender += 1;
        } else {
            next_attacker += 1;
        }
        defenders_turn = !defenders_turn;
    }

    for d in (1..gains.len()).rev() {
        gains[d - 1] = -(-gains[d - 1]).max(gains[d]);
    }
    gains[0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::types::PieceKind::{Bishop, King, Knight, Pawn, Queen, Rook};

    #[test]
    fn test_undefended_piece_is_lost() {
        assert_eq!(exchange_gain(Knight.value(), &[Queen], &[]), Knight.value());
    }

    #[test]
    fn test_queen_takes_pawn_defended_knight() {
        let gain = exchange_gain(Knight.value(), &[Queen], &[Pawn]);
        assert_eq!(gain, Knight.value() - Queen.value());
    }

    #[test]
    fn test_pawn_takes_defended_rook() {
        let gain = exchange_gain(Rook.value(), &[Pawn], &[Knight]);
        assert_eq!(gain, Rook.value() - Pawn.value());
    }

    #[test]
    fn test_bishop_for_defended_knight() {
        let gain = exchange_gain(Knight.value(), &[Bishop], &[Pawn]);
        assert_eq!(gain, Knight.value() - Bishop.value());
    }

    #[test]
    fn test_king_cannot_recapture_into_defence() {
        // Pawn defended only by its king, rook backed by a queen: the king
        // cannot recapture.
        let gain = exchange_gain(Pawn.value(), &[Rook, Queen], &[King]);
        assert_eq!(gain, Pawn.value());
    }

    #[test]
    fn test_no_attackers() {
        assert_eq!(exchange_gain(Queen.value(), &[], &[Pawn]), 0);
    }
}
