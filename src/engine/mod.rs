//! Game-level interface for an external client.
//!
//! The client constructs an `Engine` for its side, feeds it the moves of the
//! game as they arrive and asks it for a move when it is the engine's turn.

mod controller;

pub use controller::Engine;
