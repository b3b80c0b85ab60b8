use super::super::Square;

/// King: one step in any direction (Chebyshev distance exactly 1).
#[must_use]
pub fn is_legal_king_move(src: Square, dst: Square) -> bool {
    if src.rank_index == dst.rank_index && src.file == dst.file {
        return false;
    }
    src.rank_distance(dst) <= 1 && src.file_distance(dst) <= 1
}
