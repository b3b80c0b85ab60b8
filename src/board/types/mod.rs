//! Core board types.
//!
//! - `Coordinate` and `Square` - textual and parsed board squares
//! - `Piece`, `Color` and `PieceKind` - piece types, sides and their codes

mod piece;
mod square;

pub use piece::{Color, Piece, PieceKind};
pub use square::{Coordinate, Square, FILES, INVALID_INDEX, RANKS};

pub(crate) use square::{file_from_char, rank_to_index};
