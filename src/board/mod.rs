//! Board geometry and per-piece move validation.
//!
//! Squares use a letter rank (`a`-`h`) and a numeric file (`1`-`8`). There
//! is no board state: each predicate decides whether a displacement has a
//! legal shape for its piece on an empty board.
//!
//! # Example
//! ```
//! use move_validator::board::{is_legal_move_between, Piece};
//!
//! assert_eq!(is_legal_move_between(Piece::Pawn, "e2", "e4"), Ok(true));
//! assert_eq!(is_legal_move_between(Piece::Bishop, "d3", "h8"), Ok(false));
//! ```

mod coordinates;
mod error;
pub mod prelude;
mod rules;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use error::{PieceError, SquareError};
pub use types::{Color, Coordinate, Piece, PieceKind, Square, FILES, INVALID_INDEX, RANKS};

// Public API - coordinate conversions
pub use coordinates::{all_coordinates, coordinate_from_rank_and_file, square_from_coordinate};

// Public API - movement predicates and dispatch
pub use rules::{
    is_legal_bishop_move, is_legal_king_move, is_legal_knight_move, is_legal_move,
    is_legal_move_between, is_legal_pawn_move, is_legal_queen_move, is_legal_rook_move,
    legal_destinations, MoveRule,
};
