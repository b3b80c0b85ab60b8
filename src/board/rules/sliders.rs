use super::super::Square;

/// Rook: along a shared rank or a shared file, any distance, never a non-move.
#[must_use]
pub fn is_legal_rook_move(src: Square, dst: Square) -> bool {
    let same_rank = src.rank_index == dst.rank_index;
    let same_file = src.file == dst.file;
    same_rank != same_file
}

/// Bishop: equal rank and file distance, never a non-move.
#[must_use]
pub fn is_legal_bishop_move(src: Square, dst: Square) -> bool {
    if src.rank_index == dst.rank_index && src.file == dst.file {
        return false;
    }
    src.rank_distance(dst) == src.file_distance(dst)
}

/// Queen: any rook move or bishop move.
#[must_use]
pub fn is_legal_queen_move(src: Square, dst: Square) -> bool {
    is_legal_rook_move(src, dst) || is_legal_bishop_move(src, dst)
}
