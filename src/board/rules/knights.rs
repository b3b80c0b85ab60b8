use super::super::Square;

/// The eight knight jumps as `(rank_index, file)` offsets.
pub(crate) const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
];

/// Knight: destination is one of the eight jumps from the source.
#[must_use]
pub fn is_legal_knight_move(src: Square, dst: Square) -> bool {
    KNIGHT_OFFSETS
        .iter()
        .any(|&(dr, df)| src.rank_index + dr == dst.rank_index && src.file + df == dst.file)
}
