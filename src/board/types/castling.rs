//! Castling rights and the static castling table.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Square;

pub(crate) const CASTLE_WHITE_K: u8 = 1 << 0;
pub(crate) const CASTLE_WHITE_Q: u8 = 1 << 1;
pub(crate) const CASTLE_BLACK_K: u8 = 1 << 2;
pub(crate) const CASTLE_BLACK_Q: u8 = 1 << 3;

/// All castling rights combined
pub(crate) const ALL_CASTLING_RIGHTS: u8 =
    CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// Castling rights represented as a bitmask
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, kingside: bool) -> bool {
        self.0 & Self::bit_for(color, kingside) != 0
    }

    /// Set a specific castling right
    #[inline]
    pub fn set(&mut self, color: Color, kingside: bool) {
        self.0 |= Self::bit_for(color, kingside);
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, color: Color, kingside: bool) {
        self.0 &= !Self::bit_for(color, kingside);
    }

    /// Remove both rights of one color
    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        self.remove(color, true);
        self.remove(color, false);
    }

    #[inline]
    pub(crate) const fn has_bit(self, bit: u8) -> bool {
        self.0 & bit != 0
    }

    #[inline]
    pub(crate) fn clear_bit(&mut self, bit: u8) {
        self.0 &= !bit;
    }

    /// Get the raw bitmask value
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Create from raw bitmask value; bits above the four rights are dropped
    #[inline]
    #[must_use]
    pub const fn from_u8(value: u8) -> Self {
        CastlingRights(value & ALL_CASTLING_RIGHTS)
    }

    /// Parse the FEN castling field (`KQkq` subset or `-`).
    pub(crate) fn from_fen(field: &str) -> Option<Self> {
        if field == "-" {
            return Some(CastlingRights::none());
        }
        if field.is_empty() {
            return None;
        }
        let mut rights = CastlingRights::none();
        for c in field.chars() {
            let bit = match c {
                'K' => CASTLE_WHITE_K,
                'Q' => CASTLE_WHITE_Q,
                'k' => CASTLE_BLACK_K,
                'q' => CASTLE_BLACK_Q,
                _ => return None,
            };
            rights.0 |= bit;
        }
        Some(rights)
    }

    /// FEN castling field, `-` when no rights remain
    #[must_use]
    pub fn to_fen(self) -> String {
        let mut field = String::new();
        for rule in &CASTLING_RULES {
            if self.has_bit(rule.right) {
                field.push(rule.fen_char);
            }
        }
        if field.is_empty() {
            field.push('-');
        }
        field
    }

    /// Get the bit for a specific castling right
    #[inline]
    const fn bit_for(color: Color, kingside: bool) -> u8 {
        match (color, kingside) {
            (Color::White, true) => CASTLE_WHITE_K,
            (Color::White, false) => CASTLE_WHITE_Q,
            (Color::Black, true) => CASTLE_BLACK_K,
            (Color::Black, false) => CASTLE_BLACK_Q,
        }
    }
}

/// Everything needed to generate, validate and play one castle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastlingRule {
    pub(crate) right: u8,
    pub(crate) fen_char: char,
    pub color: Color,
    pub kingside: bool,
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Squares between king and rook that must be vacant.
    pub must_be_empty: &'static [Square],
    /// King start and transit squares; the destination is checked by the
    /// regular legality test.
    pub must_be_safe: &'static [Square],
}

/// One entry per castling right, in FEN order (`K`, `Q`, `k`, `q`).
pub const CASTLING_RULES: [CastlingRule; 4] = [
    CastlingRule {
        right: CASTLE_WHITE_K,
        fen_char: 'K',
        color: Color::White,
        kingside: true,
        king_from: Square::E1,
        king_to: Square::G1,
        rook_from: Square::H1,
        rook_to: Square::F1,
        must_be_empty: &[Square::F1, Square::G1],
        must_be_safe: &[Square::E1, Square::F1],
    },
    CastlingRule {
        right: CASTLE_WHITE_Q,
        fen_char: 'Q',
        color: Color::White,
        kingside: false,
        king_from: Square::E1,
        king_to: Square::C1,
        rook_from: Square::A1,
        rook_to: Square::D1,
        must_be_empty: &[Square::B1, Square::C1, Square::D1],
        must_be_safe: &[Square::E1, Square::D1],
    },
    CastlingRule {
        right: CASTLE_BLACK_K,
        fen_char: 'k',
        color: Color::Black,
        kingside: true,
        king_from: Square::E8,
        king_to: Square::G8,
        rook_from: Square::H8,
        rook_to: Square::F8,
        must_be_empty: &[Square::F8, Square::G8],
        must_be_safe: &[Square::E8, Square::F8],
    },
    CastlingRule {
        right: CASTLE_BLACK_Q,
        fen_char: 'q',
        color: Color::Black,
        kingside: false,
        king_from: Square::E8,
        king_to: Square::C8,
        rook_from: Square::A8,
        rook_to: Square::D8,
        must_be_empty: &[Square::B8, Square::C8, Square::D8],
        must_be_safe: &[Square::E8, Square::D8],
    },
];

/// Rules available to one color.
pub(crate) fn rules_for(color: Color) -> impl Iterator<Item = &'static CastlingRule> {
    CASTLING_RULES.iter().filter(move |rule| rule.color == color)
}

/// The rule whose rook starts on `square`, if any.
pub(crate) fn rule_for_rook_origin(square: Square) -> Option<&'static CastlingRule> {
    CASTLING_RULES.iter().find(|rule| rule.rook_from == square)
}

/// The rule matching a castle move's king destination.
pub(crate) fn rule_for_king_target(color: Color, king_to: Square) -> Option<&'static CastlingRule> {
    rules_for(color).find(|rule| rule.king_to == king_to)
}
