//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `coordinates.rs` - Coordinate construction, parsing and the 64-square list
//! - `sliders.rs` - Rook, bishop and queen moves
//! - `knights.rs` - Knight jumps
//! - `kings.rs` - King steps
//! - `pawns.rs` - Pawn pushes, first moves and captures
//! - `dispatch.rs` - Piece-to-predicate lookup and piece codes
//! - `proptest.rs` - Property-based tests

mod kings;
mod knights;

use crate::board::{square_from_coordinate, Square};

/// Parse a test coordinate that is known to be well formed.
fn sq(coordinate: &str) -> Square {
    square_from_coordinate(coordinate).expect("test coordinate")
}
