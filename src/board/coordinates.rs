//! Conversions between textual coordinates and parsed squares, and the
//! fixed list of all 64 board coordinates.

use once_cell::sync::Lazy;

use super::types::{file_from_char, rank_to_index, Coordinate, Square, FILES, RANKS};

/// Every coordinate on the board, rank-major: `a1..a8, b1..b8, ..., h1..h8`.
static COORDINATES: Lazy<Vec<Coordinate>> = Lazy::new(|| {
    RANKS
        .iter()
        .flat_map(|&rank| {
            FILES
                .iter()
                .map(move |&file| coordinate_from_rank_and_file(rank, file))
        })
        .collect()
});

/// Join a rank letter and a file number into a coordinate.
///
/// Neither component is range-checked: `('a', 9)` gives `"a9"`, which is
/// simply absent from [`all_coordinates`].
#[must_use]
pub fn coordinate_from_rank_and_file(rank: char, file: i32) -> Coordinate {
    Coordinate(format!("{rank}{file}"))
}

/// Parse coordinate text into a [`Square`].
///
/// Returns `None` for empty input or input shorter than two characters.
/// Anything longer is read from its first two characters without further
/// validation; an unknown rank letter or non-digit file is stored as
/// [`INVALID_INDEX`](super::types::INVALID_INDEX). Use `str::parse::<Square>`
/// for a strict parse.
#[must_use]
pub fn square_from_coordinate(coordinate: &str) -> Option<Square> {
    let mut chars = coordinate.chars();
    let (Some(rank), Some(file)) = (chars.next(), chars.next()) else {
        #[cfg(feature = "logging")]
        log::trace!("rejected coordinate {coordinate:?}: fewer than two characters");
        return None;
    };

    Some(Square {
        rank,
        file: file_from_char(file),
        rank_index: rank_to_index(rank),
    })
}

/// All 64 coordinates in rank-major order; index 0 is `a1`, index 63 is `h8`.
#[must_use]
pub fn all_coordinates() -> &'static [Coordinate] {
    &COORDINATES
}
