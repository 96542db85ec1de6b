//! Move types and move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::CastlingRule;
use super::piece::{ColoredPiece, Piece};
use super::square::Square;

// Move flags (4 bits, values 0-15)
const FLAG_QUIET: u8 = 0;
const FLAG_DOUBLE_PAWN: u8 = 1;
const FLAG_CASTLE_KINGSIDE: u8 = 2;
const FLAG_CASTLE_QUEENSIDE: u8 = 3;
const FLAG_CAPTURE: u8 = 4;
const FLAG_EN_PASSANT: u8 = 5;
// 6-7 reserved
const FLAG_PROMO_KNIGHT: u8 = 8;
const FLAG_PROMO_BISHOP: u8 = 9;
const FLAG_PROMO_ROOK: u8 = 10;
const FLAG_PROMO_QUEEN: u8 = 11;
const FLAG_PROMO_CAPTURE_KNIGHT: u8 = 12;
const FLAG_PROMO_CAPTURE_BISHOP: u8 = 13;
const FLAG_PROMO_CAPTURE_ROOK: u8 = 14;
const FLAG_PROMO_CAPTURE_QUEEN: u8 = 15;

/// Bit added to a promotion flag when the promotion also captures.
const PROMO_CAPTURE_BIT: u8 = 4;

/// A move as produced by the generator.
///
/// Besides the squares it records the moving piece and the captured piece, so
/// the move alone is enough to undo it. `gives_check` and `gives_mate` are
/// only filled in by [`Position::generate_annotated_moves`]; everywhere else
/// they read `false`.
///
/// [`Position::generate_annotated_moves`]: crate::board::Position::generate_annotated_moves
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    piece: ColoredPiece,
    captured: Option<ColoredPiece>,
    flag: u8,
    gives_check: bool,
    gives_mate: bool,
}

impl Move {
    #[inline]
    const fn with_flag(
        from: Square,
        to: Square,
        piece: ColoredPiece,
        captured: Option<ColoredPiece>,
        flag: u8,
    ) -> Self {
        Move {
            from,
            to,
            piece,
            captured,
            flag,
            gives_check: false,
            gives_mate: false,
        }
    }

    /// Create a quiet move (no capture, no special flags)
    #[inline]
    #[must_use]
    pub const fn quiet(from: Square, to: Square, piece: ColoredPiece) -> Self {
        Move::with_flag(from, to, piece, None, FLAG_QUIET)
    }

    /// Create a capture move
    #[inline]
    #[must_use]
    pub const fn capture(
        from: Square,
        to: Square,
        piece: ColoredPiece,
        captured: ColoredPiece,
    ) -> Self {
        Move::with_flag(from, to, piece, Some(captured), FLAG_CAPTURE)
    }

    /// Create a double pawn push move
    #[inline]
    #[must_use]
    pub const fn double_pawn_push(from: Square, to: Square, piece: ColoredPiece) -> Self {
        Move::with_flag(from, to, piece, None, FLAG_DOUBLE_PAWN)
    }

    /// Create an en passant capture. `captured` is the pawn beside the target.
    #[inline]
    #[must_use]
    pub const fn en_passant(
        from: Square,
        to: Square,
        piece: ColoredPiece,
        captured: ColoredPiece,
    ) -> Self {
        Move::with_flag(from, to, piece, Some(captured), FLAG_EN_PASSANT)
    }

    /// Create the king move of a castle described by `rule`
    #[inline]
    #[must_use]
    pub(crate) const fn castle(rule: &CastlingRule, king: ColoredPiece) -> Self {
        let flag = if rule.kingside {
            FLAG_CASTLE_KINGSIDE
        } else {
            FLAG_CASTLE_QUEENSIDE
        };
        Move::with_flag(rule.king_from, rule.king_to, king, None, flag)
    }

    /// Create a promotion, optionally capturing
    #[inline]
    #[must_use]
    pub const fn promotion_to(
        from: Square,
        to: Square,
        pawn: ColoredPiece,
        promote_to: Piece,
        captured: Option<ColoredPiece>,
    ) -> Self {
        let base = match promote_to {
            Piece::Knight => FLAG_PROMO_KNIGHT,
            Piece::Bishop => FLAG_PROMO_BISHOP,
            Piece::Rook => FLAG_PROMO_ROOK,
            _ => FLAG_PROMO_QUEEN, // Default to queen for invalid pieces
        };
        let flag = if captured.is_some() {
            base | PROMO_CAPTURE_BIT
        } else {
            base
        };
        Move::with_flag(from, to, pawn, captured, flag)
    }

    #[inline]
    pub(crate) const fn annotated(mut self, gives_check: bool, gives_mate: bool) -> Self {
        self.gives_check = gives_check;
        self.gives_mate = gives_mate;
        self
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// The piece being moved, as it stood on the source square
    #[inline]
    #[must_use]
    pub const fn piece(self) -> ColoredPiece {
        self.piece
    }

    /// The piece removed by this move, if any
    #[inline]
    #[must_use]
    pub const fn captured(self) -> Option<ColoredPiece> {
        self.captured
    }

    /// Square the captured piece stands on. Differs from `to()` for en passant.
    #[inline]
    #[must_use]
    pub fn captured_square(self) -> Option<Square> {
        if self.captured.is_none() {
            return None;
        }
        if self.is_en_passant() {
            Square::from_coords(self.to.file(), self.from.rank())
        } else {
            Some(self.to)
        }
    }

    /// Raw 4-bit flag
    #[inline]
    #[must_use]
    pub const fn flag(self) -> u8 {
        self.flag
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        let f = self.flag;
        f == FLAG_CAPTURE || f == FLAG_EN_PASSANT || f >= FLAG_PROMO_CAPTURE_KNIGHT
    }

    /// Returns true if this move is en passant
    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        self.flag == FLAG_EN_PASSANT
    }

    /// Returns true if this move is castling (kingside or queenside)
    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        self.flag == FLAG_CASTLE_KINGSIDE || self.flag == FLAG_CASTLE_QUEENSIDE
    }

    /// Returns true if this is kingside castling (O-O)
    #[inline]
    #[must_use]
    pub const fn is_castle_kingside(self) -> bool {
        self.flag == FLAG_CASTLE_KINGSIDE
    }

    /// Returns true if this is queenside castling (O-O-O)
    #[inline]
    #[must_use]
    pub const fn is_castle_queenside(self) -> bool {
        self.flag == FLAG_CASTLE_QUEENSIDE
    }

    /// Returns true if this move is a double pawn push
    #[inline]
    #[must_use]
    pub const fn is_double_pawn_push(self) -> bool {
        self.flag == FLAG_DOUBLE_PAWN
    }

    /// Returns true if this move is a pawn promotion
    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.flag >= FLAG_PROMO_KNIGHT
    }

    /// Get the promotion piece, if this is a promotion move
    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        match self.flag {
            FLAG_PROMO_KNIGHT | FLAG_PROMO_CAPTURE_KNIGHT => Some(Piece::Knight),
            FLAG_PROMO_BISHOP | FLAG_PROMO_CAPTURE_BISHOP => Some(Piece::Bishop),
            FLAG_PROMO_ROOK | FLAG_PROMO_CAPTURE_ROOK => Some(Piece::Rook),
            FLAG_PROMO_QUEEN | FLAG_PROMO_CAPTURE_QUEEN => Some(Piece::Queen),
            _ => None,
        }
    }

    /// Returns true if this move is "quiet" (not a capture, promotion, or castle)
    #[inline]
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        self.flag == FLAG_QUIET || self.flag == FLAG_DOUBLE_PAWN
    }

    /// Whether the move checks the opponent. Only set by annotated generation.
    #[inline]
    #[must_use]
    pub const fn gives_check(self) -> bool {
        self.gives_check
    }

    /// Whether the move mates the opponent. Only set by annotated generation.
    #[inline]
    #[must_use]
    pub const fn gives_mate(self) -> bool {
        self.gives_mate
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({:?} {}{}", self.piece, self.from, self.to)?;
        if let Some(promo) = self.promotion() {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        if let Some(captured) = self.captured {
            write!(f, " x{captured:?}")?;
        }
        if self.is_castling() {
            write!(f, " castle")?;
        }
        if self.is_en_passant() {
            write!(f, " ep")?;
        }
        if self.gives_mate {
            write!(f, " #")?;
        } else if self.gives_check {
            write!(f, " +")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion() {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

pub(crate) const MAX_MOVES: usize = 256;

/// Filler for unused `MoveList` slots; never observable through the list API.
const EMPTY_MOVE: Move = Move::quiet(
    Square::A1,
    Square::A1,
    ColoredPiece::new(super::piece::Color::White, Piece::Pawn),
);

/// List of moves with fixed-size backing array.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            moves: [EMPTY_MOVE; MAX_MOVES],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        debug_assert!(self.len < MAX_MOVES, "MoveList overflow");
        self.moves[self.len] = mv;
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = Move> + '_ {
        self.moves[..self.len].iter().copied()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        if idx < self.len {
            Some(self.moves[idx])
        } else {
            None
        }
    }

    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.iter().any(|m| m == *mv)
    }

    pub(crate) fn extend_from(&mut self, other: &MoveList) {
        for mv in other.iter() {
            self.push(mv);
        }
    }
}

impl fmt::Debug for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

/// Owning iterator over moves in a `MoveList`
pub struct MoveListIntoIter {
    list: MoveList,
    idx: usize,
}

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx < self.list.len {
            let mv = self.list.moves[self.idx];
            self.idx += 1;
            Some(mv)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter { list: self, idx: 0 }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.moves[idx]
    }
}
