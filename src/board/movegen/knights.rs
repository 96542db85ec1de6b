use super::rays::{KNIGHT_JUMPS, STEP};
use super::super::{ColoredPiece, MoveList, Position, Square};

impl Position {
    pub(crate) fn generate_knight_moves(
        &self,
        from: Square,
        knight: ColoredPiece,
        moves: &mut MoveList,
    ) {
        self.board
            .push_ray_moves(from, knight, &KNIGHT_JUMPS, STEP, moves);
    }
}
