//! Movement rules for each piece type on an otherwise empty board.
//!
//! Every predicate takes an already parsed source and destination square and
//! answers whether the displacement has the right shape for the piece.
//! Occupancy, blocking pieces, check and turn order are not considered.
//!
//! # Example
//! ```
//! use move_validator::board::{is_legal_knight_move, square_from_coordinate};
//!
//! let src = square_from_coordinate("c3").unwrap();
//! let dst = square_from_coordinate("e4").unwrap();
//! assert!(is_legal_knight_move(src, dst));
//! ```

mod kings;
mod knights;
mod pawns;
mod sliders;

pub use kings::is_legal_king_move;
pub use knights::is_legal_knight_move;
pub use pawns::is_legal_pawn_move;
pub use sliders::{is_legal_bishop_move, is_legal_queen_move, is_legal_rook_move};

use super::coordinates::all_coordinates;
use super::error::SquareError;
use super::types::{Coordinate, Piece, Square};

/// Signature shared by all movement predicates.
pub type MoveRule = fn(Square, Square) -> bool;

impl Piece {
    /// The movement predicate for this piece type.
    #[must_use]
    pub fn legality(self) -> MoveRule {
        match self {
            Piece::Pawn => is_legal_pawn_move,
            Piece::Knight => is_legal_knight_move,
            Piece::Bishop => is_legal_bishop_move,
            Piece::Rook => is_legal_rook_move,
            Piece::Queen => is_legal_queen_move,
            Piece::King => is_legal_king_move,
        }
    }
}

/// Check a move for any piece type by dispatching to its predicate.
#[inline]
#[must_use]
pub fn is_legal_move(piece: Piece, src: Square, dst: Square) -> bool {
    (piece.legality())(src, dst)
}

/// Check a move given as coordinate text, e.g. `("e2", "e4")`.
///
/// Both coordinates are parsed strictly, so text outside `a1`-`h8` is an
/// error instead of reaching the predicate.
pub fn is_legal_move_between(piece: Piece, src: &str, dst: &str) -> Result<bool, SquareError> {
    let src: Square = src.parse()?;
    let dst: Square = dst.parse()?;
    Ok(is_legal_move(piece, src, dst))
}

/// Every coordinate the piece could reach from `src`, in rank-major order.
#[must_use]
pub fn legal_destinations(piece: Piece, src: Square) -> Vec<Coordinate> {
    let rule = piece.legality();
    all_coordinates()
        .iter()
        .filter(|coordinate| {
            Square::try_from(*coordinate).is_ok_and(|dst| rule(src, dst))
        })
        .cloned()
        .collect()
}
