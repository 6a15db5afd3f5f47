//! Core chess types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `PieceKind`, `Color` and the arena `Piece` record
//! - `Square` - board square index (rank in bits 3-5, file in bits 0-2)
//! - `Move` - bit-packed move with its text form
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::{CastleSide, CastlingRights};
pub use moves::Move;
pub use piece::{Color, Piece, PieceId, PieceKind};
pub use square::Square;

pub(crate) use piece::PROMOTION_KINDS;
