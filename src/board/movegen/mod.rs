//! Move generation.
//!
//! Pseudo-legal moves come from walking rays over the mailbox grid. A move is
//! legal if, after playing it, the mover's king is not threatened; legality
//! is always checked by make, test, unmake on the position itself.

mod attacks;
mod kings;
mod knights;
mod pawns;
pub(crate) mod rays;
mod sliders;

use self::rays::{ALL_DIRECTIONS, DIAGONAL, SLIDE, STRAIGHT};
use super::types::Kind;
use super::{Color, ColoredPiece, Move, MoveList, Position, Square};

impl Position {
    /// Moves for the piece on `sq` that obey piece movement but may leave its
    /// own king attacked. An empty square gives an empty list.
    #[must_use]
    pub fn pseudo_legal_moves_from(&self, sq: Square) -> MoveList {
        let mut moves = MoveList::new();
        if let Some(piece) = self.board.piece_at(sq) {
            self.push_pseudo_legal(sq, piece, &mut moves);
        }
        moves
    }

    fn push_pseudo_legal(&self, from: Square, piece: ColoredPiece, moves: &mut MoveList) {
        match piece.kind() {
            Kind::NorthPawn | Kind::SouthPawn => self.generate_pawn_moves(from, piece, moves),
            Kind::Knight => self.generate_knight_moves(from, piece, moves),
            Kind::Bishop => self
                .board
                .push_ray_moves(from, piece, &DIAGONAL, SLIDE, moves),
            Kind::Rook => self
                .board
                .push_ray_moves(from, piece, &STRAIGHT, SLIDE, moves),
            Kind::Queen => self
                .board
                .push_ray_moves(from, piece, &ALL_DIRECTIONS, SLIDE, moves),
            Kind::King => self.generate_king_moves(from, piece, moves),
        }
    }

    /// Whether `mv` leaves the mover's king safe.
    ///
    /// The position is unchanged on return. A side without a king can never
    /// be in check, so all its moves pass.
    pub fn is_legal(&mut self, mv: Move) -> bool {
        let mover = mv.piece().color();
        self.make_move(mv);
        let legal = !self.is_in_check(mover);
        self.unmake_move(mv);
        legal
    }

    /// Legal moves for the piece on `sq`, whichever side it belongs to.
    pub fn legal_moves_from(&mut self, sq: Square) -> MoveList {
        let mut legal = MoveList::new();
        for mv in self.pseudo_legal_moves_from(sq) {
            if self.is_legal(mv) {
                legal.push(mv);
            }
        }
        legal
    }

    /// All legal moves for `color`, regardless of whose turn it is.
    pub fn legal_moves(&mut self, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        for sq in Square::all() {
            if self.board.piece_at(sq).is_some_and(|p| p.color() == color) {
                let from_square = self.legal_moves_from(sq);
                moves.extend_from(&from_square);
            }
        }
        moves
    }

    /// All legal moves for the side to move.
    pub fn generate_moves(&mut self) -> MoveList {
        self.legal_moves(self.side_to_move())
    }

    /// Legal moves for the side to move with `gives_check` and `gives_mate`
    /// filled in.
    ///
    /// Both flags are computed while each move is already made for the
    /// legality test. Mate detection searches the reply moves, so this costs
    /// noticeably more than `generate_moves`.
    pub fn generate_annotated_moves(&mut self) -> MoveList {
        let color = self.side_to_move();
        let enemy = color.opponent();
        let mut moves = MoveList::new();
        for sq in Square::all() {
            if !self.board.piece_at(sq).is_some_and(|p| p.color() == color) {
                continue;
            }
            for mv in self.pseudo_legal_moves_from(sq) {
                self.make_move(mv);
                if !self.is_in_check(color) {
                    let check = self.is_in_check(enemy);
                    let mate = check && !self.has_legal_moves(enemy);
                    moves.push(mv.annotated(check, mate));
                }
                self.unmake_move(mv);
            }
        }
        moves
    }

    /// Whether `color` has at least one legal move. Stops at the first one.
    pub fn has_legal_moves(&mut self, color: Color) -> bool {
        for sq in Square::all() {
            if !self.board.piece_at(sq).is_some_and(|p| p.color() == color) {
                continue;
            }
            for mv in self.pseudo_legal_moves_from(sq) {
                if self.is_legal(mv) {
                    return true;
                }
            }
        }
        false
    }

    /// Whether `color`'s king is attacked. `false` when that side has no king.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.board
            .king_square(color)
            .is_some_and(|king| self.is_square_threatened(king, color.opponent()))
    }

    /// Side to move is in check with no legal reply.
    pub fn is_checkmate(&mut self) -> bool {
        let color = self.side_to_move();
        self.is_in_check(color) && !self.has_legal_moves(color)
    }

    /// Side to move is not in check but has no legal move.
    pub fn is_stalemate(&mut self) -> bool {
        let color = self.side_to_move();
        !self.is_in_check(color) && !self.has_legal_moves(color)
    }
}
