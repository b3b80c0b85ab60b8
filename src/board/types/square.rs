//! Coordinate and square types.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Rank letters in board order. `rank_index` is a position in this array.
pub const RANKS: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// File numbers in board order.
pub const FILES: [i32; 8] = [1, 2, 3, 4, 5, 6, 7, 8];

/// Sentinel stored in `Square::rank_index` or `Square::file` for a component
/// that could not be read from the coordinate text.
pub const INVALID_INDEX: i32 = -1;

pub(crate) fn rank_to_index(rank: char) -> i32 {
    RANKS
        .iter()
        .position(|&r| r == rank)
        .map_or(INVALID_INDEX, |idx| idx as i32)
}

pub(crate) fn file_from_char(file: char) -> i32 {
    file.to_digit(10).map_or(INVALID_INDEX, |d| d as i32)
}

/// Textual board coordinate such as `"e4"`: a rank letter followed by a file number.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate(pub String);

impl Coordinate {
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Coordinate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for Coordinate {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<&str> for Coordinate {
    fn from(s: &str) -> Self {
        Coordinate(s.to_string())
    }
}

/// Parsed form of a coordinate, used for distance arithmetic.
///
/// `rank` is the letter (`a`-`h`), `file` the number (`1`-`8`) and
/// `rank_index` the zero-based position of `rank` in [`RANKS`]. A square
/// built from malformed text carries [`INVALID_INDEX`] in the unreadable
/// component; see [`Square::is_on_board`].
///
/// Deserialization only accepts on-board squares whose `rank_index` agrees
/// with `rank`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "SquareFields"))]
pub struct Square {
    pub rank: char,
    pub file: i32,
    pub rank_index: i32,
}

impl Square {
    /// Create a square with bounds checking
    #[must_use]
    pub fn new(rank: char, file: i32) -> Option<Self> {
        let rank_index = rank_to_index(rank);
        if rank_index != INVALID_INDEX && (1..=8).contains(&file) {
            Some(Square {
                rank,
                file,
                rank_index,
            })
        } else {
            None
        }
    }

    /// True when both the rank letter and the file number lie on the 8x8 board.
    #[inline]
    #[must_use]
    pub fn is_on_board(self) -> bool {
        (0..8).contains(&self.rank_index) && (1..=8).contains(&self.file)
    }

    /// Absolute distance between the rank indices of two squares
    #[inline]
    #[must_use]
    pub fn rank_distance(self, other: Square) -> i32 {
        (self.rank_index - other.rank_index).abs()
    }

    /// Absolute distance between the file numbers of two squares
    #[inline]
    #[must_use]
    pub fn file_distance(self, other: Square) -> i32 {
        (self.file - other.file).abs()
    }

    /// The textual coordinate for this square.
    #[must_use]
    pub fn coordinate(self) -> Coordinate {
        Coordinate(self.to_string())
    }
}

/// Unchecked wire form of a [`Square`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct SquareFields {
    rank: char,
    file: i32,
    rank_index: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<SquareFields> for Square {
    type Error = SquareError;

    fn try_from(fields: SquareFields) -> Result<Self, Self::Error> {
        match Square::new(fields.rank, fields.file) {
            Some(square) if square.rank_index == fields.rank_index => Ok(square),
            _ => Err(SquareError::InvalidNotation {
                notation: format!(
                    "{}{} (rank_index {})",
                    fields.rank, fields.file, fields.rank_index
                ),
            }),
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.file)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    /// Strict parse: exactly one rank letter `a`-`h` then one digit `1`-`8`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        match chars.len() {
            0 => return Err(SquareError::Empty),
            1 => {
                return Err(SquareError::TooShort {
                    notation: s.to_string(),
                })
            }
            2 => {}
            _ => {
                return Err(SquareError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        }

        let rank = match chars[0] {
            'a'..='h' => chars[0],
            other => return Err(SquareError::InvalidRank { rank: other }),
        };

        let file = match chars[1] {
            '1'..='8' => file_from_char(chars[1]),
            other => return Err(SquareError::InvalidFile { file: other }),
        };

        Ok(Square {
            rank,
            file,
            rank_index: rank_to_index(rank),
        })
    }
}

impl TryFrom<&Coordinate> for Square {
    type Error = SquareError;

    fn try_from(coordinate: &Coordinate) -> Result<Self, Self::Error> {
        coordinate.as_str().parse()
    }
}
