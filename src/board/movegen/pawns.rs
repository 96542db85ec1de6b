use super::rays::STEP;
use super::super::types::{Kind, PROMOTION_PIECES};
use super::super::{Cell, ColoredPiece, Move, MoveList, Piece, Position, Square};

impl Position {
    /// Pushes, double pushes, diagonal captures and en passant for the pawn on
    /// `from`. Moves onto the last rank expand into one move per promotion
    /// piece.
    pub(crate) fn generate_pawn_moves(&self, from: Square, pawn: ColoredPiece, moves: &mut MoveList) {
        let kind = pawn.kind();
        let forward = kind.pawn_forward();
        let color = pawn.color();

        let push_len = if from.rank() == kind.pawn_start_rank() { 2 } else { 1 };
        let mut pushes = self
            .board
            .ray(from, forward, push_len)
            .take_while(|step| step.cell == Cell::Empty);
        if let Some(single) = pushes.next() {
            push_pawn_move(moves, kind, from, single.square, pawn, None);
            if let Some(double) = pushes.next() {
                moves.push(Move::double_pawn_push(from, double.square, pawn));
            }
        }

        for side in [-1, 1] {
            let Some(step) = self.board.ray(from, forward + side, STEP).next() else {
                continue;
            };
            match step.cell {
                Cell::Occupied(target) if target.color() != color => {
                    push_pawn_move(moves, kind, from, step.square, pawn, Some(target));
                }
                Cell::Empty
                    if color == self.state.side_to_move
                        && self.state.en_passant == Some(step.square) =>
                {
                    // The pawn being taken sits beside us, on the target's file.
                    let beside = Square::from_coords(step.square.file(), from.rank());
                    let victim = beside
                        .and_then(|sq| self.board.piece_at(sq))
                        .filter(|p| p.piece() == Piece::Pawn && p.color() != color);
                    if let Some(victim) = victim {
                        moves.push(Move::en_passant(from, step.square, pawn, victim));
                    }
                }
                _ => {}
            }
        }
    }
}

fn push_pawn_move(
    moves: &mut MoveList,
    kind: Kind,
    from: Square,
    to: Square,
    pawn: ColoredPiece,
    captured: Option<ColoredPiece>,
) {
    if to.rank() == kind.pawn_promotion_rank() {
        for promote_to in PROMOTION_PIECES {
            moves.push(Move::promotion_to(from, to, pawn, promote_to, captured));
        }
        return;
    }
    match captured {
        Some(target) => moves.push(Move::capture(from, to, pawn, target)),
        None => moves.push(Move::quiet(from, to, pawn)),
    }
}
