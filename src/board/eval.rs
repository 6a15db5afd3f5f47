//! Static evaluation.
//!
//! Ten terms are scored for each color separately; the evaluation from one
//! side's point of view is its total minus the opponent's total.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::state::Position;
use super::types::Color;

/// Per-term scores of one color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SideScore {
    pub material: i32,
    pub bishop_pair: i32,
    pub board_control: i32,
    pub development: i32,
    pub doubled_pawns: i32,
    pub hanging: i32,
    pub king_safety: i32,
    pub passed_pawns: i32,
    pub pawn_islands: i32,
    pub rook_activity: i32,
}

impl SideScore {
    #[must_use]
    pub fn total(&self) -> i32 {
        self.material
            + self.bishop_pair
            + self.board_control
            + self.development
            + self.doubled_pawns
            + self.hanging
            + self.king_safety
            + self.passed_pawns
            + self.pawn_islands
            + self.rook_activity
    }
}

/// Every evaluation term for both colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EvalBreakdown {
    pub endgame: bool,
    pub white: SideScore,
    pub black: SideScore,
}

impl EvalBreakdown {
    #[must_use]
    pub fn side(&self, color: Color) -> &SideScore {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    /// Score from `color`'s point of view.
    #[must_use]
    pub fn score(&self, color: Color) -> i32 {
        self.side(color).total() - self.side(color.opponent()).total()
    }
}

impl Position {
    /// Evaluate the position from `side`'s point of view; positive favors `side`.
    #[must_use]
    pub fn evaluate(&self, side: Color) -> i32 {
        self.eval_breakdown().score(side)
    }

    /// Compute every term for both colors.
    #[must_use]
    pub fn eval_breakdown(&self) -> EvalBreakdown {
        let endgame = self.is_endgame();
        let attacks = self.compute_attack_map();
        let side = |color: Color| SideScore {
            material: self.eval_material(color),
            bishop_pair: self.eval_bishop_pair(color),
            board_control: self.eval_board_control(color, &attacks, endgame),
            development: self.eval_development(color),
            doubled_pawns: self.eval_doubled_pawns(color),
            hanging: self.eval_hanging(color, &attacks),
            king_safety: self.eval_king_safety(color, endgame),
            passed_pawns: self.eval_passed_pawns(color, endgame),
            pawn_islands: self.eval_pawn_islands(color),
            rook_activity: self.eval_rooks(color),
        };
        EvalBreakdown {
            endgame,
            white: side(Color::White),
            black: side(Color::Black),
        }
    }
}

/// Evaluate `pos` from `side`'s point of view.
#[must_use]
pub fn evaluate(pos: &Position, side: Color) -> i32 {
    pos.evaluate(side)
}
