//! Property-based tests using proptest.

use crate::board::{Color, Move, Position};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=30usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

const START_POSITIONS: [&str; 3] = [
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1",
];

fn start_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(START_POSITIONS.to_vec())
}

proptest! {
    /// Property: unmaking every move in reverse order restores the position exactly
    #[test]
    fn prop_make_unmake_restores_state(
        fen in start_strategy(),
        seed in seed_strategy(),
        num_moves in move_count_strategy(),
    ) {
        let mut pos = Position::from_fen(fen).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let initial = pos.clone();

        let mut history: Vec<Move> = Vec::new();
        for _ in 0..num_moves {
            let moves = pos.generate_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            pos.make_move(mv);
            history.push(mv);
        }

        while let Some(mv) = history.pop() {
            pos.unmake_move(mv);
        }

        prop_assert_eq!(pos.board(), initial.board());
        prop_assert_eq!(pos.state(), initial.state());
        prop_assert_eq!(pos.get_fen(), fen);
        prop_assert_eq!(pos.history_len(), 0);
    }

    /// Property: FEN export then import gives back the same position
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut pos = Position::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let moves = pos.generate_moves();
            if moves.is_empty() {
                break;
            }
            pos.make_move(moves[rng.gen_range(0..moves.len())]);

            let fen = pos.get_fen();
            let reloaded = Position::from_fen(&fen).unwrap();
            prop_assert_eq!(reloaded.board(), pos.board());
            prop_assert_eq!(reloaded.state(), pos.state());
            prop_assert_eq!(reloaded.get_fen(), fen);
        }
    }

    /// Property: after any legal move the side that just moved is not in check
    #[test]
    fn prop_mover_never_left_in_check(
        fen in start_strategy(),
        seed in seed_strategy(),
        num_moves in move_count_strategy(),
    ) {
        let mut pos = Position::from_fen(fen).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let moves = pos.generate_moves();
            if moves.is_empty() {
                prop_assert!(pos.is_checkmate() || pos.is_stalemate());
                break;
            }
            let mover = pos.side_to_move();
            pos.make_move(moves[rng.gen_range(0..moves.len())]);
            prop_assert!(!pos.is_in_check(mover));
            prop_assert_eq!(pos.side_to_move(), mover.opponent());
        }
    }

    /// Property: annotated generation returns the same moves with consistent flags
    #[test]
    fn prop_annotations_match_plain_generation(
        fen in start_strategy(),
        seed in seed_strategy(),
        num_moves in 0..12usize,
    ) {
        let mut pos = Position::from_fen(fen).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let moves = pos.generate_moves();
            if moves.is_empty() {
                break;
            }
            pos.make_move(moves[rng.gen_range(0..moves.len())]);
        }

        let plain = pos.generate_moves();
        let annotated = pos.generate_annotated_moves();
        prop_assert_eq!(plain.len(), annotated.len());

        let enemy: Color = pos.side_to_move().opponent();
        for mv in annotated {
            prop_assert!(plain.iter().any(|m| m.from() == mv.from() && m.to() == mv.to()));
            prop_assert!(!mv.gives_mate() || mv.gives_check());
            pos.make_move(mv);
            prop_assert_eq!(mv.gives_check(), pos.is_in_check(enemy));
            prop_assert_eq!(mv.gives_mate(), pos.is_checkmate());
            pos.unmake_move(mv);
        }
    }
}
