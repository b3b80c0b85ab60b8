//! Error types for coordinate and piece parsing.

use std::fmt;

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Empty coordinate string
    Empty,
    /// Coordinate has fewer than two characters
    TooShort { notation: String },
    /// Rank letter outside `a`-`h`
    InvalidRank { rank: char },
    /// File character outside `1`-`8`
    InvalidFile { file: char },
    /// Coordinate is not exactly a rank letter followed by a file digit
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::Empty => write!(f, "Empty coordinate"),
            SquareError::TooShort { notation } => {
                write!(f, "Coordinate '{notation}' is too short")
            }
            SquareError::InvalidRank { rank } => {
                write!(f, "Rank '{rank}' out of bounds (must be a-h)")
            }
            SquareError::InvalidFile { file } => {
                write!(f, "File '{file}' out of bounds (must be 1-8)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for piece parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PieceError {
    /// Character is not one of `KQRBNPkqrbnp`
    InvalidSymbol { symbol: char },
    /// Word is neither a piece symbol nor a piece name
    InvalidName { name: String },
}

impl fmt::Display for PieceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceError::InvalidSymbol { symbol } => {
                write!(f, "Invalid piece symbol '{symbol}'")
            }
            PieceError::InvalidName { name } => write!(f, "Invalid piece name '{name}'"),
        }
    }
}

impl std::error::Error for PieceError {}
