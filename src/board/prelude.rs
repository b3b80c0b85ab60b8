//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use move_validator::board::prelude::*;
//!
//! let src = square_from_coordinate("a1").unwrap();
//! assert!(is_legal_move(Piece::Rook, src, square_from_coordinate("a7").unwrap()));
//! ```

pub use super::{
    all_coordinates, coordinate_from_rank_and_file, is_legal_move, is_legal_move_between,
    square_from_coordinate, Color, Coordinate, Piece, PieceError, PieceKind, Square, SquareError,
};
