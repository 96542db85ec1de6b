//! Chess board representation and rules.
//!
//! Pieces live on a 10x12 mailbox grid whose border cells are permanently
//! off-board, so every ray walk stops at the edge without bounds arithmetic.
//! A [`Position`] owns the grid, the non-placement state and an undo stack;
//! moves are played with [`Position::make_move`] and taken back with
//! [`Position::unmake_move`].
//!
//! # Example
//! ```
//! use mailbox_chess::board::Position;
//!
//! let mut pos = Position::new();
//! let moves = pos.generate_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod error;
mod fen;
mod mailbox;
mod make_unmake;
mod movegen;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, PlacementError, SquareError};
pub use fen::START_FEN;
pub use mailbox::{Board, START_PLACEMENT};
pub use state::{Position, PositionState};
pub use types::{
    CastlingRights, CastlingRule, Cell, Color, ColoredPiece, Move, MoveList, MoveListIntoIter,
    Piece, Square, CASTLING_RULES, GRID_SIZE,
};
