//! Piece, color and board-cell types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chess piece types, independent of color.
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
    /// All piece types in index order
    pub const ALL: [Piece; 6] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    /// Parse a piece from a character, ignoring case (p, n, b, r, q, k)
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
}

/// Promotion piece choices, queen first
pub(crate) const PROMOTION_PIECES: [Piece; 4] =
    [Piece::Queen, Piece::Rook, Piece::Bishop, Piece::Knight];

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors in index order (White=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn fen_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Movement class of a piece as stored on the board.
///
/// Each class is a single bit. Pawns come in two classes, one per direction of
/// travel, so pawn logic reads the direction off the class and never has to
/// branch on color.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub(crate) enum Kind {
    /// Pawn advancing toward rank 8.
    NorthPawn = 1 << 0,
    Knight = 1 << 1,
    Bishop = 1 << 2,
    Rook = 1 << 3,
    Queen = 1 << 4,
    King = 1 << 5,
    /// Pawn advancing toward rank 1.
    SouthPawn = 1 << 6,
}

impl Kind {
    #[inline]
    pub(crate) const fn piece(self) -> Piece {
        match self {
            Kind::NorthPawn | Kind::SouthPawn => Piece::Pawn,
            Kind::Knight => Piece::Knight,
            Kind::Bishop => Piece::Bishop,
            Kind::Rook => Piece::Rook,
            Kind::Queen => Piece::Queen,
            Kind::King => Piece::King,
        }
    }

    #[inline]
    pub(crate) const fn is_pawn(self) -> bool {
        matches!(self, Kind::NorthPawn | Kind::SouthPawn)
    }

    /// Attacks along diagonals at any range.
    #[inline]
    pub(crate) const fn slides_diagonally(self) -> bool {
        matches!(self, Kind::Bishop | Kind::Queen)
    }

    /// Attacks along ranks and files at any range.
    #[inline]
    pub(crate) const fn slides_straight(self) -> bool {
        matches!(self, Kind::Rook | Kind::Queen)
    }

    /// Mailbox step for a pawn push; zero for everything else.
    #[inline]
    pub(crate) const fn pawn_forward(self) -> isize {
        match self {
            Kind::NorthPawn => 10,
            Kind::SouthPawn => -10,
            _ => 0,
        }
    }

    /// Rank a pawn of this class double-pushes from.
    #[inline]
    pub(crate) const fn pawn_start_rank(self) -> u8 {
        match self {
            Kind::SouthPawn => 6,
            _ => 1,
        }
    }

    /// Rank a pawn of this class promotes on.
    #[inline]
    pub(crate) const fn pawn_promotion_rank(self) -> u8 {
        match self {
            Kind::SouthPawn => 0,
            _ => 7,
        }
    }
}

/// A piece of a given color, as stored in a board cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColoredPiece {
    kind: Kind,
    color: Color,
}

impl ColoredPiece {
    /// Pack a piece and color. Pawns get the movement class of their color.
    #[inline]
    #[must_use]
    pub const fn new(color: Color, piece: Piece) -> Self {
        let kind = match piece {
            Piece::Pawn => match color {
                Color::White => Kind::NorthPawn,
                Color::Black => Kind::SouthPawn,
            },
            Piece::Knight => Kind::Knight,
            Piece::Bishop => Kind::Bishop,
            Piece::Rook => Kind::Rook,
            Piece::Queen => Kind::Queen,
            Piece::King => Kind::King,
        };
        ColoredPiece { kind, color }
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }

    #[inline]
    #[must_use]
    pub const fn piece(self) -> Piece {
        self.kind.piece()
    }

    #[inline]
    pub(crate) const fn kind(self) -> Kind {
        self.kind
    }

    /// Parse a FEN letter: uppercase is White, lowercase is Black.
    #[must_use]
    pub fn from_fen_char(c: char) -> Option<Self> {
        let piece = Piece::from_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(ColoredPiece::new(color, piece))
    }

    /// FEN letter, uppercase for White.
    #[inline]
    #[must_use]
    pub fn to_fen_char(self) -> char {
        let c = self.piece().to_char();
        if self.color == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }
}

impl fmt::Debug for ColoredPiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen_char())
    }
}

/// Contents of one cell of the padded grid.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Cell {
    #[default]
    Empty,
    OffBoard,
    Occupied(ColoredPiece),
}

impl Cell {
    #[inline]
    #[must_use]
    pub const fn piece(self) -> Option<ColoredPiece> {
        match self {
            Cell::Occupied(p) => Some(p),
            _ => None,
        }
    }
}
