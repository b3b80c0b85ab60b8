use super::super::Square;

/// File of the White pawn start row and its first-move targets.
const WHITE_START_FILE: i32 = 2;
const WHITE_FIRST_MOVE_FILES: [i32; 2] = [3, 4];

/// File of the Black pawn start row and its first-move targets.
const BLACK_START_FILE: i32 = 7;
const BLACK_FIRST_MOVE_FILES: [i32; 2] = [5, 6];

/// Pawn, with no color input and no board.
///
/// From a start row (file 2 or 7) any square one or two rows ahead is legal;
/// the rank letter is not checked on this branch. Otherwise a single row
/// step on the same rank, or a diagonal step, in either direction.
#[must_use]
pub fn is_legal_pawn_move(src: Square, dst: Square) -> bool {
    let first_move_white =
        src.file == WHITE_START_FILE && WHITE_FIRST_MOVE_FILES.contains(&dst.file);
    let first_move_black =
        src.file == BLACK_START_FILE && BLACK_FIRST_MOVE_FILES.contains(&dst.file);
    if first_move_white || first_move_black {
        return true;
    }

    let rank_diff = src.rank_distance(dst);
    let file_diff = src.file_distance(dst);

    // Push
    if rank_diff == 0 && file_diff == 1 {
        return true;
    }

    // Capture
    rank_diff == 1 && file_diff == 1
}
