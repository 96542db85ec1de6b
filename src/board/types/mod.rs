//! Core chess types.
//!
//! - `Square` - dense square index plus the 10x12 mailbox tables
//! - `Piece`, `Color`, `ColoredPiece` and `Cell` - what a board cell holds
//! - `Move` and `MoveList` - move representation
//! - `CastlingRights` and `CASTLING_RULES` - castling state and metadata

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::{CastlingRights, CastlingRule, CASTLING_RULES};
pub use moves::{Move, MoveList, MoveListIntoIter};
pub use piece::{Cell, Color, ColoredPiece, Piece};
pub use square::{Square, GRID_SIZE};

pub(crate) use castling::{rule_for_king_target, rule_for_rook_origin, rules_for};
pub(crate) use piece::{Kind, PROMOTION_PIECES};
