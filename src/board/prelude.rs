//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use kestrel_chess::board::prelude::*;
//!
//! let mut pos = Position::new();
//! assert_eq!(pos.legal_moves().len(), 20);
//! ```

pub use super::{
    select_move, Color, FenError, GameResult, Move, MoveParseError, PieceKind, Position,
    SearchConfig, Square, SquareError,
};
