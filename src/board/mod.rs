//! Chess position representation and game logic.
//!
//! Pieces live in an arena addressed by stable ids; the board and the
//! per-color registries refer to them by id. Supports full chess rules
//! including castling, en passant, promotions and the draw rules.
//!
//! # Example
//! ```
//! use kestrel_chess::board::Position;
//!
//! let mut pos = Position::new();
//! let moves = pos.legal_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod error;
mod eval;
pub mod eval_terms;
mod fen;
mod history;
mod make_unmake;
mod movegen;
pub mod prelude;
mod search;
mod state;
pub mod tables;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use error::{FenError, MoveParseError, SquareError};
pub use eval::{evaluate, EvalBreakdown, SideScore};
pub use fen::START_FEN;
pub use history::PositionSignature;
pub use movegen::GenMode;
pub use state::{EnPassant, GameResult, Position};
pub use types::{CastleSide, CastlingRights, Color, Move, Piece, PieceId, PieceKind, Square};

// Public API - move selection and configuration
pub use search::{
    search_root, select_move, SearchConfig, SearchResult, SearchStats, INFINITY, MATE_SCORE,
};
