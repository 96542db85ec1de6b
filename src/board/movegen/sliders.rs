use super::super::mailbox::Board;
use super::super::{Cell, ColoredPiece, Move, MoveList, Square};

impl Board {
    /// Push one move per square each ray from `from` reaches.
    ///
    /// Empty squares give quiet moves and an opposing piece gives a capture;
    /// an own piece ends the ray with no move. Knights and kings use the same
    /// walk with a single step.
    pub(crate) fn push_ray_moves(
        &self,
        from: Square,
        piece: ColoredPiece,
        dirs: &[isize],
        max_len: u8,
        moves: &mut MoveList,
    ) {
        for &dir in dirs {
            for step in self.ray(from, dir, max_len) {
                match step.cell {
                    Cell::Empty => moves.push(Move::quiet(from, step.square, piece)),
                    Cell::Occupied(target) if target.color() != piece.color() => {
                        moves.push(Move::capture(from, step.square, piece, target));
                    }
                    _ => {}
                }
            }
        }
    }
}
