use super::rays::{ALL_DIRECTIONS, STEP};
use super::super::types::rules_for;
use super::super::{ColoredPiece, Move, MoveList, Piece, Position, Square};

impl Position {
    /// King steps plus any castle the current state allows.
    ///
    /// A castle needs the king on its home square, the right still held, the
    /// rook on its origin square, the path empty, and neither the king's square
    /// nor the square it crosses attacked. The destination is left to the
    /// legality filter.
    pub(crate) fn generate_king_moves(&self, from: Square, king: ColoredPiece, moves: &mut MoveList) {
        self.board
            .push_ray_moves(from, king, &ALL_DIRECTIONS, STEP, moves);

        let color = king.color();
        let rook = ColoredPiece::new(color, Piece::Rook);
        for rule in rules_for(color) {
            if from != rule.king_from
                || !self.state.castling_rights.has_bit(rule.right)
                || self.board.piece_at(rule.rook_from) != Some(rook)
            {
                continue;
            }
            if !rule.must_be_empty.iter().all(|&sq| self.board.is_empty(sq)) {
                continue;
            }
            if rule
                .must_be_safe
                .iter()
                .any(|&sq| self.is_square_threatened(sq, color.opponent()))
            {
                continue;
            }
            moves.push(Move::castle(rule, king));
        }
    }
}
