//! Evaluation terms.
//!
//! Each term scores one color in isolation (positive is good for that color):
//! - Material and bishop pair
//! - Board control (attacked squares)
//! - Development
//! - Pawn structure (doubled pawns, pawn islands)
//! - Hanging pieces
//! - King safety
//! - Passed pawns
//! - Rook activity

mod board_control;
mod development;
mod hanging;
mod helpers;
mod king_safety;
mod material;
mod passed_pawns;
mod pawn_structure;
mod rooks;
pub mod tables;

pub use helpers::AttackMap;
