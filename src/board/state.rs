//! Position state and the undo history.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::mailbox::{Board, START_PLACEMENT};
use super::{CastlingRights, Color, Square};

/// Everything about a position that is not piece placement.
///
/// A copy is pushed before every move and popped on unmake, so restoring it
/// is a plain assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PositionState {
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant: Option<Square>,
    pub halfmove_clock: u32,
}

impl Default for PositionState {
    fn default() -> Self {
        PositionState {
            side_to_move: Color::White,
            castling_rights: CastlingRights::all(),
            en_passant: None,
            halfmove_clock: 0,
        }
    }
}

/// A board together with its state and undo history.
///
/// Each independent line of play needs its own `Position`; the history stack
/// only pairs up with the `make_move`/`unmake_move` calls made on this value.
#[derive(Clone, Debug)]
pub struct Position {
    pub(crate) board: Board,
    pub(crate) state: PositionState,
    pub(crate) history: Vec<PositionState>,
    pub(crate) ply: u64,
}

impl Position {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Position::from_parts(
            Board::from_placement(START_PLACEMENT).unwrap_or_else(|_| Board::empty()),
            PositionState::default(),
            0,
        )
    }

    pub(crate) fn from_parts(board: Board, state: PositionState, ply: u64) -> Self {
        Position {
            board,
            state,
            history: Vec::with_capacity(64),
            ply,
        }
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> &PositionState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.state.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.state.castling_rights
    }

    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.state.en_passant
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.state.halfmove_clock
    }

    /// Half-moves played since fullmove 1, white to move.
    #[inline]
    #[must_use]
    pub fn ply(&self) -> u64 {
        self.ply
    }

    /// FEN fullmove number, derived from the ply counter.
    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u64 {
        self.ply / 2 + 1
    }

    /// Number of moves that can currently be unmade.
    #[inline]
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}
