//! The single ray-walking primitive behind both move generation and threat
//! detection.

use super::super::mailbox::Board;
use super::super::types::{Cell, Square};

/// Orthogonal mailbox steps.
pub(crate) const STRAIGHT: [isize; 4] = [10, -10, 1, -1];
/// Diagonal mailbox steps.
pub(crate) const DIAGONAL: [isize; 4] = [11, 9, -9, -11];
/// King and queen steps.
pub(crate) const ALL_DIRECTIONS: [isize; 8] = [10, -10, 1, -1, 11, 9, -9, -11];
/// Knight jumps.
pub(crate) const KNIGHT_JUMPS: [isize; 8] = [21, 19, 12, 8, -8, -12, -19, -21];

/// Maximum steps a slider can take across the board.
pub(crate) const SLIDE: u8 = 7;
/// A single step, for knights and kings.
pub(crate) const STEP: u8 = 1;

/// Walks outward from a square in one direction.
///
/// Yields each empty square, then the first occupied square (if any) and
/// stops. Leaving the board ends the walk without yielding. At most
/// `max_len` squares are yielded.
pub(crate) struct Ray<'a> {
    board: &'a Board,
    idx: usize,
    dir: isize,
    walked: u8,
    max_len: u8,
}

/// One square visited by a `Ray`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct RayStep {
    pub square: Square,
    pub cell: Cell,
    /// 1 for the square adjacent to the origin.
    pub distance: u8,
}

impl Board {
    #[inline]
    pub(crate) fn ray(&self, from: Square, dir: isize, max_len: u8) -> Ray<'_> {
        Ray {
            board: self,
            idx: from.mailbox(),
            dir,
            walked: 0,
            max_len,
        }
    }

    /// Last square a ray reaches: the first occupied cell, if it is within range.
    #[inline]
    pub(crate) fn first_hit(&self, from: Square, dir: isize, max_len: u8) -> Option<RayStep> {
        self.ray(from, dir, max_len)
            .last()
            .filter(|step| step.cell != Cell::Empty)
    }
}

impl Iterator for Ray<'_> {
    type Item = RayStep;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.walked >= self.max_len {
            return None;
        }
        // The padding absorbs every step taken from a playable cell, so the
        // index stays inside the grid until the walk stops.
        let next = self.idx.wrapping_add_signed(self.dir);
        let Some(square) = Square::from_mailbox(next) else {
            self.walked = self.max_len;
            return None;
        };
        let cell = self.board.cell(next);
        self.idx = next;
        self.walked += 1;
        let distance = self.walked;
        if cell != Cell::Empty {
            self.walked = self.max_len;
        }
        Some(RayStep {
            square,
            cell,
            distance,
        })
    }
}
