//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Node counts for move generation
//! - `draw.rs` - Game end detection (50-move, repetition, material, mate)
//! - `make_unmake.rs` - Make/unmake move correctness
//! - `edge_cases.rs` - Special positions and edge cases
//! - `eval.rs` - Evaluation symmetry
//! - `search.rs` - Move selection
//! - `proptest.rs` - Property-based tests

mod eval;
