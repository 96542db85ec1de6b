use std::fmt;
use std::str::FromStr;

use super::error::FenError;
use super::mailbox::Board;
use super::state::PositionState;
use super::{CastlingRights, Color, Position, Square};

/// FEN of the standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Position {
    /// Parse a position from FEN notation.
    ///
    /// The halfmove clock and fullmove number may be omitted and default to
    /// `0` and `1`.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let (board, state, ply) = parse_fen(fen)?;
        Ok(Position::from_parts(board, state, ply))
    }

    /// Replace this position with one parsed from FEN.
    ///
    /// On error the position and its history are left untouched. On success
    /// the undo history is cleared.
    pub fn set_from_fen(&mut self, fen: &str) -> Result<(), FenError> {
        let (board, state, ply) = parse_fen(fen)?;
        self.board = board;
        self.state = state;
        self.ply = ply;
        self.history.clear();
        Ok(())
    }

    /// Convert the position to FEN notation.
    #[must_use]
    pub fn get_fen(&self) -> String {
        let ep = self
            .state
            .en_passant
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            self.board.serialize(),
            self.state.side_to_move.fen_char(),
            self.state.castling_rights.to_fen(),
            ep,
            self.state.halfmove_clock,
            self.fullmove_number()
        )
    }
}

fn parse_fen(fen: &str) -> Result<(Board, PositionState, u64), FenError> {
    parse_fields(fen).map_err(|err| {
        log::debug!("rejected FEN {fen:?}: {err}");
        err
    })
}

fn parse_fields(fen: &str) -> Result<(Board, PositionState, u64), FenError> {
    let parts: Vec<&str> = fen.split_whitespace().collect();

    if parts.len() < 4 {
        return Err(FenError::TooFewParts { found: parts.len() });
    }
    if parts.len() > 6 {
        return Err(FenError::TooManyParts { found: parts.len() });
    }

    let board = Board::from_placement(parts[0])?;

    let side_to_move = match parts[1] {
        "w" => Color::White,
        "b" => Color::Black,
        other => {
            return Err(FenError::InvalidSideToMove {
                found: other.to_string(),
            })
        }
    };

    let castling_rights =
        CastlingRights::from_fen(parts[2]).ok_or_else(|| FenError::InvalidCastling {
            found: parts[2].to_string(),
        })?;

    let en_passant = match parts[3] {
        "-" => None,
        field => {
            let sq = field
                .parse::<Square>()
                .ok()
                .filter(|sq| sq.rank() == 2 || sq.rank() == 5)
                .ok_or_else(|| FenError::InvalidEnPassant {
                    found: field.to_string(),
                })?;
            Some(sq)
        }
    };

    let halfmove_clock = match parts.get(4) {
        Some(field) => field
            .parse::<u32>()
            .map_err(|_| FenError::InvalidHalfmoveClock {
                found: (*field).to_string(),
            })?,
        None => 0,
    };

    let fullmove_number = match parts.get(5) {
        Some(field) => field
            .parse::<u32>()
            .ok()
            .filter(|&n| n >= 1)
            .ok_or_else(|| FenError::InvalidFullmoveNumber {
                found: (*field).to_string(),
            })?,
        None => 1,
    };

    let ply = (u64::from(fullmove_number) - 1) * 2 + u64::from(side_to_move == Color::Black);

    let state = PositionState {
        side_to_move,
        castling_rights,
        en_passant,
        halfmove_clock,
    };
    log::debug!("loaded position {fen:?}");
    Ok((board, state, ply))
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_fen())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::error::PlacementError;

    #[test]
    fn test_fen_round_trip() {
        for fen in [
            START_FEN,
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
            "4k3/8/8/8/8/8/8/4K3 b - - 99 140",
        ] {
            let pos = Position::from_fen(fen).unwrap();
            assert_eq!(pos.get_fen(), fen);
        }
    }

    #[test]
    fn test_short_fen_defaults() {
        let pos = Position::from_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -",
        )
        .unwrap();
        assert_eq!(pos.halfmove_clock(), 0);
        assert_eq!(pos.fullmove_number(), 1);
    }

    #[test]
    fn test_black_to_move_ply() {
        let pos = Position::from_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 7").unwrap();
        assert_eq!(pos.ply(), 13);
        assert_eq!(pos.fullmove_number(), 7);
    }

    #[test]
    fn test_huge_fullmove_number() {
        let fen = "4k3/8/8/8/8/8/8/4K3 w - - 0 3000000000";
        let pos = Position::from_fen(fen).unwrap();
        assert_eq!(pos.fullmove_number(), 3_000_000_000);
        assert_eq!(pos.get_fen(), fen);

        let mut pos = Position::from_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 4294967295").unwrap();
        let mv = pos.generate_moves()[0];
        pos.make_move(mv);
        assert_eq!(pos.fullmove_number(), 4_294_967_296);
        assert!(pos.get_fen().ends_with(" 4294967296"));
        pos.unmake_move(mv);
        assert_eq!(pos.fullmove_number(), 4_294_967_295);

        assert!(matches!(
            Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 4294967296"),
            Err(FenError::InvalidFullmoveNumber { .. })
        ));
    }

    #[test]
    fn test_fen_error_too_few_parts() {
        let result = Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w");
        assert!(matches!(result, Err(FenError::TooFewParts { found: 2 })));
    }

    #[test]
    fn test_fen_error_too_many_parts() {
        let result = Position::from_fen(&format!("{START_FEN} extra"));
        assert!(matches!(result, Err(FenError::TooManyParts { found: 7 })));
    }

    #[test]
    fn test_fen_error_placement() {
        let result =
            Position::from_fen("rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert_eq!(
            result.unwrap_err(),
            FenError::Placement(PlacementError::InvalidCharacter { ch: 'x' })
        );
    }

    #[test]
    fn test_fen_error_invalid_side_to_move() {
        let result =
            Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidSideToMove { .. })));
    }

    #[test]
    fn test_fen_error_invalid_castling() {
        let result =
            Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w XQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidCastling { .. })));
    }

    #[test]
    fn test_fen_error_invalid_en_passant() {
        for ep in ["z9", "e4", "e"] {
            let fen = format!("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq {ep} 0 1");
            assert!(
                matches!(Position::from_fen(&fen), Err(FenError::InvalidEnPassant { .. })),
                "{ep}"
            );
        }
    }

    #[test]
    fn test_fen_error_clocks() {
        let bad_half = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - x 1";
        assert!(matches!(
            Position::from_fen(bad_half),
            Err(FenError::InvalidHalfmoveClock { .. })
        ));
        let bad_full = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 0";
        assert!(matches!(
            Position::from_fen(bad_full),
            Err(FenError::InvalidFullmoveNumber { .. })
        ));
    }

    #[test]
    fn test_set_from_fen_failure_keeps_position() {
        let mut pos = Position::new();
        let before = pos.get_fen();
        assert!(pos.set_from_fen("8/8/8 w - - 0 1").is_err());
        assert_eq!(pos.get_fen(), before);

        pos.set_from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert_eq!(pos.get_fen(), "4k3/8/8/8/8/8/8/4K3 w - - 0 1");
    }

    #[test]
    fn test_from_str_and_display() {
        let pos: Position = START_FEN.parse().unwrap();
        assert_eq!(pos.to_string(), START_FEN);
        assert_eq!(Position::new().get_fen(), START_FEN);
    }
}
