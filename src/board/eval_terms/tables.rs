//! Evaluation constants and tables.
//!
//! All weights are centipawns. Rank-indexed tables use the rank relative to
//! the evaluated color (0 = own back rank).

// ============================================================================
// PHASE
// ============================================================================

/// Non-pawn, non-king material per side at or below which the game counts as
/// an endgame even with queens on the board.
pub const ENDGAME_MATERIAL_LIMIT: i32 = 1300;

// ============================================================================
// MATERIAL
// ============================================================================

pub const BISHOP_PAIR_BONUS: i32 = 30;

// ============================================================================
// BOARD CONTROL
// ============================================================================

/// Base value of every attacked square
pub const CONTROL_BASE: i32 = 1;

/// Bonus for attacking squares further up the board
pub const CONTROL_RANK_MG: [i32; 8] = [0, 0, 0, 1, 2, 2, 3, 3];
pub const CONTROL_RANK_EG: [i32; 8] = [0, 0, 1, 1, 2, 3, 3, 3];

/// Bonus for attacking central files
pub const CONTROL_FILE_MG: [i32; 8] = [0, 0, 1, 2, 2, 1, 0, 0];
pub const CONTROL_FILE_EG: [i32; 8] = [0, 0, 0, 1, 1, 0, 0, 0];

/// Bonus by king distance between the attacked square and the enemy king
pub const CONTROL_KING_PROXIMITY_MG: [i32; 8] = [4, 4, 2, 1, 0, 0, 0, 0];
pub const CONTROL_KING_PROXIMITY_EG: [i32; 8] = [2, 2, 1, 0, 0, 0, 0, 0];

// ============================================================================
// DEVELOPMENT
// ============================================================================

/// Knight or bishop still on its back rank
pub const UNDEVELOPED_MINOR: i32 = -15;

/// d- or e-pawn still on its start square
pub const UNMOVED_CENTER_PAWN: i32 = -10;

/// Extra when the square in front of that pawn is occupied
pub const BLOCKED_CENTER_PAWN: i32 = -15;

// ============================================================================
// PAWN STRUCTURE
// ============================================================================

/// Per file holding more than one own pawn
pub const DOUBLED_PAWN: i32 = -20;

/// Per pawn island beyond the first
pub const PAWN_ISLAND: i32 = -15;

// ============================================================================
// HANGING PIECES
// ============================================================================

/// Share (percent) of the expected exchange loss counted when the opponent
/// moves next and can start the exchange.
pub const HANGING_WEIGHT_THEIR_MOVE: i32 = 90;

/// Share (percent) counted when the owner moves next and can react first.
pub const HANGING_WEIGHT_OUR_MOVE: i32 = 25;

// ============================================================================
// KING SAFETY
// ============================================================================

/// King on or beyond its fifth rank
pub const KING_FAR_ADVANCED: i32 = -120;

/// King on its third or fourth rank
pub const KING_ADVANCED: i32 = -60;

/// King file penalty (a..h)
pub const KING_FILE_PENALTY: [i32; 8] = [0, -5, -20, -50, -50, -20, -5, 0];

/// Per friendly piece on the three squares in front of the king
pub const KING_SHIELD_BONUS: i32 = 12;

// ============================================================================
// PASSED PAWNS
// ============================================================================

pub const PASSED_PAWN_BASE: i32 = 20;

/// Bonus by relative rank
pub const PASSED_RANK_BONUS: [i32; 8] = [0, 0, 5, 10, 20, 35, 60, 0];

/// Passed pawn backed by a passed pawn one rank behind on an adjacent file
pub const PASSED_PROTECTED_BONUS: i32 = 15;

/// Extra endgame bonus by relative rank
pub const PASSED_ENDGAME_BONUS: [i32; 8] = [0, 0, 0, 0, 0, 30, 50, 0];

// ============================================================================
// ROOK ACTIVITY
// ============================================================================

/// Rook with no own pawn on its file
pub const ROOK_UNBLOCKED_FILE: i32 = 15;
