//! Threat detection by reversed rays.
//!
//! Rather than generating the opponent's moves, look outward from the target
//! square and ask whether the first piece met on each line could travel back
//! along it.

use super::rays::{DIAGONAL, KNIGHT_JUMPS, SLIDE, STEP, STRAIGHT};
use super::super::mailbox::Board;
use super::super::types::Kind;
use super::super::{Color, Piece, Position, Square};

impl Board {
    pub(crate) fn is_square_threatened(&self, sq: Square, by: Color) -> bool {
        for dir in DIAGONAL {
            let Some(hit) = self.first_hit(sq, dir, SLIDE) else {
                continue;
            };
            let Some(piece) = hit.cell.piece().filter(|p| p.color() == by) else {
                continue;
            };
            let kind = piece.kind();
            if kind.slides_diagonally() {
                return true;
            }
            // A pawn attacks toward where it is heading, so the ray from the
            // target must point against its direction of travel.
            if hit.distance == 1
                && (kind == Kind::King || (kind.is_pawn() && dir * kind.pawn_forward() < 0))
            {
                return true;
            }
        }

        for dir in STRAIGHT {
            let Some(hit) = self.first_hit(sq, dir, SLIDE) else {
                continue;
            };
            let Some(piece) = hit.cell.piece().filter(|p| p.color() == by) else {
                continue;
            };
            let kind = piece.kind();
            if kind.slides_straight() || (hit.distance == 1 && kind == Kind::King) {
                return true;
            }
        }

        KNIGHT_JUMPS.iter().any(|&jump| {
            self.first_hit(sq, jump, STEP)
                .and_then(|hit| hit.cell.piece())
                .is_some_and(|p| p.color() == by && p.piece() == Piece::Knight)
        })
    }
}

impl Position {
    /// Whether a piece of color `by` attacks `sq`.
    ///
    /// The square's own contents do not matter, so this also answers whether
    /// a king could safely step there.
    #[must_use]
    pub fn is_square_threatened(&self, sq: Square, by: Color) -> bool {
        self.board.is_square_threatened(sq, by)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    fn threatened(placement: &str, target: &str, by: Color) -> bool {
        Board::from_placement(placement)
            .unwrap()
            .is_square_threatened(sq(target), by)
    }

    #[test]
    fn test_pawn_attacks_follow_direction() {
        // White pawn on d3 attacks c4 and e4, not c2.
        let placement = "4k3/8/8/8/8/3P4/8/4K3";
        assert!(threatened(placement, "e4", Color::White));
        assert!(threatened(placement, "c4", Color::White));
        assert!(!threatened(placement, "c2", Color::White));
        assert!(!threatened(placement, "d4", Color::White));

        // Black pawn on d5 attacks c4 and e4, not e6.
        let placement = "4k3/8/8/3p4/8/8/8/4K3";
        assert!(threatened(placement, "e4", Color::Black));
        assert!(!threatened(placement, "e6", Color::Black));
    }

    #[test]
    fn test_sliders_are_blocked() {
        let placement = "4k3/8/8/8/1b6/2P5/8/R3K3";
        assert!(!threatened(placement, "d2", Color::Black));
        assert!(threatened(placement, "c3", Color::Black));
        assert!(threatened(placement, "a8", Color::White));
        assert!(!threatened(placement, "b2", Color::White));
    }

    #[test]
    fn test_king_only_at_range_one() {
        let placement = "8/8/8/8/8/8/8/K6k";
        assert!(threatened(placement, "b2", Color::White));
        assert!(threatened(placement, "a2", Color::White));
        assert!(!threatened(placement, "a3", Color::White));
        assert!(!threatened(placement, "c3", Color::White));
    }

    #[test]
    fn test_knight_threats() {
        let placement = "4k3/8/8/8/3n4/8/8/4K3";
        assert!(threatened(placement, "e2", Color::Black));
        assert!(threatened(placement, "f5", Color::Black));
        assert!(!threatened(placement, "e3", Color::Black));
        // The white king covers e2 but not f5.
        assert!(!threatened(placement, "f5", Color::White));
    }

    #[test]
    fn test_queen_both_geometries() {
        let placement = "4k3/8/8/8/3q4/8/8/4K3";
        assert!(threatened(placement, "h8", Color::Black));
        assert!(threatened(placement, "d1", Color::Black));
        assert!(threatened(placement, "a4", Color::Black));
        assert!(!threatened(placement, "e2", Color::Black));
    }
}
