//! Piece, color and piece-code types.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::PieceError;

/// Chess piece types.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Piece {
    /// All piece types
    pub const ALL: [Piece; 6] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    /// Parse a piece from its letter, either case (p, n, b, r, q, k)
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        match c.to_ascii_lowercase() {
            'p' => Some(Piece::Pawn),
            'n' => Some(Piece::Knight),
            'b' => Some(Piece::Bishop),
            'r' => Some(Piece::Rook),
            'q' => Some(Piece::Queen),
            'k' => Some(Piece::King),
            _ => None,
        }
    }

    /// Convert piece to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Piece::Pawn => 'p',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Rook => 'r',
            Piece::Queen => 'q',
            Piece::King => 'k',
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Piece::Pawn => "pawn",
            Piece::Knight => "knight",
            Piece::Bishop => "bishop",
            Piece::Rook => "rook",
            Piece::Queen => "queen",
            Piece::King => "king",
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Piece {
    type Err = PieceError;

    /// Accepts a single piece letter in either case or an English piece name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Piece::from_char(c).ok_or(PieceError::InvalidSymbol { symbol: c });
        }

        let lower = s.to_ascii_lowercase();
        Piece::ALL
            .into_iter()
            .find(|p| p.name() == lower)
            .ok_or_else(|| PieceError::InvalidName {
                name: s.to_string(),
            })
    }
}

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// A colored piece, identified by a single-character code.
///
/// Uppercase codes are White, lowercase codes are Black. The movement
/// predicates never look at the color; callers use the kind to pick one.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceKind {
    pub color: Color,
    pub piece: Piece,
}

impl PieceKind {
    pub const WHITE_KING: PieceKind = PieceKind::new(Color::White, Piece::King);
    pub const WHITE_QUEEN: PieceKind = PieceKind::new(Color::White, Piece::Queen);
    pub const WHITE_ROOK: PieceKind = PieceKind::new(Color::White, Piece::Rook);
    pub const WHITE_BISHOP: PieceKind = PieceKind::new(Color::White, Piece::Bishop);
    pub const WHITE_KNIGHT: PieceKind = PieceKind::new(Color::White, Piece::Knight);
    pub const WHITE_PAWN: PieceKind = PieceKind::new(Color::White, Piece::Pawn);

    pub const BLACK_KING: PieceKind = PieceKind::new(Color::Black, Piece::King);
    pub const BLACK_QUEEN: PieceKind = PieceKind::new(Color::Black, Piece::Queen);
    pub const BLACK_ROOK: PieceKind = PieceKind::new(Color::Black, Piece::Rook);
    pub const BLACK_BISHOP: PieceKind = PieceKind::new(Color::Black, Piece::Bishop);
    pub const BLACK_KNIGHT: PieceKind = PieceKind::new(Color::Black, Piece::Knight);
    pub const BLACK_PAWN: PieceKind = PieceKind::new(Color::Black, Piece::Pawn);

    /// The twelve piece kinds, White before Black, king first.
    pub const ALL: [PieceKind; 12] = [
        PieceKind::WHITE_KING,
        PieceKind::WHITE_QUEEN,
        PieceKind::WHITE_ROOK,
        PieceKind::WHITE_BISHOP,
        PieceKind::WHITE_KNIGHT,
        PieceKind::WHITE_PAWN,
        PieceKind::BLACK_KING,
        PieceKind::BLACK_QUEEN,
        PieceKind::BLACK_ROOK,
        PieceKind::BLACK_BISHOP,
        PieceKind::BLACK_KNIGHT,
        PieceKind::BLACK_PAWN,
    ];

    #[must_use]
    pub const fn new(color: Color, piece: Piece) -> Self {
        PieceKind { color, piece }
    }

    /// Single-character code, uppercase for White
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        let c = self.piece.to_char();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Parse a single-character code (`K`, `q`, ...), case selects the color
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        let piece = Piece::from_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(PieceKind::new(color, piece))
    }

    /// Constant-style name, e.g. `WHITE_KING`
    #[must_use]
    pub fn name(self) -> String {
        let color = match self.color {
            Color::White => "WHITE",
            Color::Black => "BLACK",
        };
        format!("{color}_{}", self.piece.name().to_ascii_uppercase())
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl FromStr for PieceKind {
    type Err = PieceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                PieceKind::from_char(c).ok_or(PieceError::InvalidSymbol { symbol: c })
            }
            _ => PieceKind::ALL
                .into_iter()
                .find(|kind| kind.name().eq_ignore_ascii_case(s))
                .ok_or_else(|| PieceError::InvalidName {
                    name: s.to_string(),
                }),
        }
    }
}
