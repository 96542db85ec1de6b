use serde::Deserialize;

use mailbox_chess::board::Position;

#[derive(Deserialize)]
struct ProblemSet {
    problems: Vec<Problem>,
}

#[derive(Deserialize)]
struct Problem {
    name: String,
    fen: String,
    /// Coordinate notation, promotion piece in lowercase.
    solution: String,
}

const PROBLEMS: &str = r#"{
  "problems": [
    { "name": "back rank",
      "fen": "6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1",
      "solution": "a1a8" },
    { "name": "back rank, black to move",
      "fen": "r5k1/8/8/8/8/8/5PPP/6K1 b - - 0 1",
      "solution": "a8a1" },
    { "name": "scholar's mate",
      "fen": "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4",
      "solution": "h5f7" },
    { "name": "fool's mate",
      "fen": "rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b KQkq - 0 2",
      "solution": "d8h4" },
    { "name": "smothered mate",
      "fen": "6rk/6pp/8/6N1/8/8/8/6K1 w - - 0 1",
      "solution": "g5f7" },
    { "name": "promotion mate",
      "fen": "k7/7P/1K6/8/8/8/8/8 w - - 0 1",
      "solution": "h7h8q" }
  ]
}"#;

fn problems() -> Vec<Problem> {
    let set: ProblemSet = serde_json::from_str(PROBLEMS).expect("invalid problem set");
    set.problems
}

#[test]
fn mate_in_one_suite() {
    for problem in problems() {
        let mut pos = Position::from_fen(&problem.fen).expect("invalid problem fen");
        let moves = pos.generate_annotated_moves();

        let solution = moves
            .iter()
            .find(|m| m.to_string() == problem.solution)
            .unwrap_or_else(|| panic!("{}: {} is not legal", problem.name, problem.solution));
        assert!(
            solution.gives_mate(),
            "{}: {} not marked as mate",
            problem.name,
            problem.solution
        );

        pos.make_move(solution);
        assert!(
            pos.is_checkmate(),
            "mate in one failed for fen: {} move: {}",
            problem.fen,
            problem.solution
        );
        pos.unmake_move(solution);
        assert_eq!(pos.get_fen(), problem.fen);
    }
}

#[test]
fn mates_are_subset_of_checks() {
    for problem in problems() {
        let mut pos = Position::from_fen(&problem.fen).unwrap();
        let moves = pos.generate_annotated_moves();
        let mates = moves.iter().filter(|m| m.gives_mate()).count();
        let checks = moves.iter().filter(|m| m.gives_check()).count();
        assert!(mates >= 1, "{}", problem.name);
        assert!(checks >= mates, "{}", problem.name);
    }
}
