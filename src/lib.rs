//! Geometric move validation for chess pieces on an empty board.

pub mod board;
pub mod protocol;

pub use board::{Color, Coordinate, Piece, PieceKind, Square};
