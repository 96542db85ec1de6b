//! Square addressing for the 10x12 mailbox.
//!
//! Squares are numbered densely (a1 = 0, h1 = 7, a8 = 56, h8 = 63). The board
//! itself is a padded grid of 10 columns by 12 rows: the two outer rows at each
//! end and the outer column on each side are permanently off-board, so any
//! piece offset applied to a playable cell still lands inside the array.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Number of cells in the padded grid.
pub const GRID_SIZE: usize = 120;

/// Reverse-table entry for padded cells that have no playable square.
pub(crate) const OFF_BOARD_INDEX: u8 = u8::MAX;

/// Dense square -> padded grid index.
pub(crate) const FORWARD: [u8; 64] = build_forward();

/// Padded grid index -> dense square, or `OFF_BOARD_INDEX`.
pub(crate) const REVERSE: [u8; GRID_SIZE] = build_reverse();

/// Rank (0 = rank 1) per dense square.
pub(crate) const RANKS: [u8; 64] = build_coords(true);

/// File (0 = file a) per dense square.
pub(crate) const FILES: [u8; 64] = build_coords(false);

/// Chebyshev distance between every pair of squares.
static DISTANCE: Lazy<[[u8; 64]; 64]> = Lazy::new(|| {
    let mut table = [[0u8; 64]; 64];
    for (a, row) in table.iter_mut().enumerate() {
        for (b, slot) in row.iter_mut().enumerate() {
            let rank_delta = RANKS[a].abs_diff(RANKS[b]);
            let file_delta = FILES[a].abs_diff(FILES[b]);
            *slot = rank_delta.max(file_delta);
        }
    }
    table
});

const fn build_forward() -> [u8; 64] {
    let mut table = [0u8; 64];
    let mut sq = 0;
    while sq < 64 {
        table[sq] = (21 + (sq / 8) * 10 + sq % 8) as u8;
        sq += 1;
    }
    table
}

const fn build_reverse() -> [u8; GRID_SIZE] {
    let mut table = [OFF_BOARD_INDEX; GRID_SIZE];
    let mut sq = 0;
    while sq < 64 {
        table[FORWARD[sq] as usize] = sq as u8;
        sq += 1;
    }
    table
}

const fn build_coords(rank: bool) -> [u8; 64] {
    let mut table = [0u8; 64];
    let mut sq = 0;
    while sq < 64 {
        table[sq] = if rank { (sq / 8) as u8 } else { (sq % 8) as u8 };
        sq += 1;
    }
    table
}

/// A playable square, a1 = 0 through h8 = 63.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    pub const A1: Square = Square(0);
    pub const B1: Square = Square(1);
    pub const C1: Square = Square(2);
    pub const D1: Square = Square(3);
    pub const E1: Square = Square(4);
    pub const F1: Square = Square(5);
    pub const G1: Square = Square(6);
    pub const H1: Square = Square(7);
    pub const A8: Square = Square(56);
    pub const B8: Square = Square(57);
    pub const C8: Square = Square(58);
    pub const D8: Square = Square(59);
    pub const E8: Square = Square(60);
    pub const F8: Square = Square(61);
    pub const G8: Square = Square(62);
    pub const H8: Square = Square(63);

    /// Create a square from its dense index, if it is on the board.
    #[inline]
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Create a square from file (0 = a) and rank (0 = rank 1).
    #[inline]
    #[must_use]
    pub const fn from_coords(file: u8, rank: u8) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Square(rank * 8 + file))
        } else {
            None
        }
    }

    /// Dense index (0-63).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Rank (0 = rank 1, 7 = rank 8).
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        RANKS[self.0 as usize]
    }

    /// File (0 = file a, 7 = file h).
    #[inline]
    #[must_use]
    pub const fn file(self) -> u8 {
        FILES[self.0 as usize]
    }

    #[inline]
    pub(crate) const fn mailbox(self) -> usize {
        FORWARD[self.0 as usize] as usize
    }

    #[inline]
    pub(crate) const fn from_mailbox(idx: usize) -> Option<Self> {
        if idx >= GRID_SIZE {
            return None;
        }
        let dense = REVERSE[idx];
        if dense == OFF_BOARD_INDEX {
            None
        } else {
            Some(Square(dense))
        }
    }

    /// Chebyshev distance (king steps) between two squares.
    #[inline]
    #[must_use]
    pub fn distance(self, other: Square) -> u8 {
        DISTANCE[self.index()][other.index()]
    }

    /// All 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + self.file()) as char,
            (b'1' + self.rank()) as char
        )
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl TryFrom<u8> for Square {
    type Error = SquareError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Square::new(index).ok_or(SquareError::OutOfRange { index })
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = match bytes[0] {
            b @ b'a'..=b'h' => b - b'a',
            _ => return Err(invalid()),
        };
        let rank = match bytes[1] {
            b @ b'1'..=b'8' => b - b'1',
            _ => return Err(invalid()),
        };
        Square::from_coords(file, rank).ok_or_else(invalid)
    }
}
