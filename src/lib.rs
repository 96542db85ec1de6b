//! Chess rules on a 10x12 mailbox board.
//!
//! FEN import and export, reversible make/unmake, legal move generation with
//! optional check and mate annotations, and perft node counting.

pub mod board;
pub mod perft;

pub use board::{
    Board, Color, ColoredPiece, FenError, Move, MoveList, Piece, Position, Square, START_FEN,
};
pub use perft::{parallel_perft, PerftStats};
