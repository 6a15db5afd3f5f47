pub mod board;
pub mod engine;

pub use board::{Color, GameResult, Move, PieceKind, Position, SearchConfig, Square};
pub use engine::Engine;
