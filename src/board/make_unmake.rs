use super::types::{rule_for_king_target, rule_for_rook_origin, Kind};
use super::{ColoredPiece, Move, Piece, Position, Square};

impl Position {
    /// Play `mv` on the board.
    ///
    /// `mv` must come from this position's generator; the previous state is
    /// pushed so `unmake_move(mv)` can restore it.
    pub fn make_move(&mut self, mv: Move) {
        self.history.push(self.state);
        self.ply += 1;

        let piece = mv.piece();
        let color = piece.color();
        let kind = piece.kind();

        self.state.side_to_move = color.opponent();
        self.state.en_passant = None;

        if let Some(captured_sq) = mv.captured_square() {
            self.board.clear(captured_sq);
        }
        if let Some(captured) = mv.captured() {
            if captured.piece() == Piece::Rook {
                if let Some(rule) = rule_for_rook_origin(mv.to()) {
                    if rule.color == captured.color() {
                        self.state.castling_rights.clear_bit(rule.right);
                    }
                }
            }
        }

        self.board.clear(mv.from());

        match kind {
            Kind::NorthPawn | Kind::SouthPawn => {
                self.state.halfmove_clock = 0;
                let placed = match mv.promotion() {
                    Some(promoted) => ColoredPiece::new(color, promoted),
                    None => piece,
                };
                self.board.put(mv.to(), placed);
                if mv.is_double_pawn_push() {
                    let skipped = mv.from().mailbox() as isize + kind.pawn_forward();
                    self.state.en_passant = Square::from_mailbox(skipped as usize);
                }
            }
            Kind::King => {
                self.board.put(mv.to(), piece);
                if mv.is_castling() {
                    if let Some(rule) = rule_for_king_target(color, mv.to()) {
                        self.board.clear(rule.rook_from);
                        self.board
                            .put(rule.rook_to, ColoredPiece::new(color, Piece::Rook));
                    }
                }
                self.state.castling_rights.remove_color(color);
                self.tick_halfmove_clock(mv);
            }
            Kind::Rook => {
                self.board.put(mv.to(), piece);
                if let Some(rule) = rule_for_rook_origin(mv.from()) {
                    if rule.color == color {
                        self.state.castling_rights.clear_bit(rule.right);
                    }
                }
                self.tick_halfmove_clock(mv);
            }
            Kind::Knight | Kind::Bishop | Kind::Queen => {
                self.board.put(mv.to(), piece);
                self.tick_halfmove_clock(mv);
            }
        }
    }

    /// Take back `mv`, which must be the most recent move made.
    ///
    /// # Panics
    /// Panics if no move has been made on this position.
    pub fn unmake_move(&mut self, mv: Move) {
        self.state = self
            .history
            .pop()
            .expect("unmake_move called without a matching make_move");
        self.ply = self.ply.saturating_sub(1);

        let piece = mv.piece();
        self.board.clear(mv.to());

        if mv.is_castling() {
            if let Some(rule) = rule_for_king_target(piece.color(), mv.to()) {
                self.board.clear(rule.rook_to);
                self.board
                    .put(rule.rook_from, ColoredPiece::new(piece.color(), Piece::Rook));
            }
        }

        self.board.put(mv.from(), piece);

        if let (Some(captured), Some(captured_sq)) = (mv.captured(), mv.captured_square()) {
            self.board.put(captured_sq, captured);
        }
    }

    fn tick_halfmove_clock(&mut self, mv: Move) {
        if mv.is_capture() {
            self.state.halfmove_clock = 0;
        } else {
            self.state.halfmove_clock = self.state.halfmove_clock.saturating_add(1);
        }
    }
}
