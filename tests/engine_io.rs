//! Integration tests for the request/response surface
//!
//! These drive the engine the way the CLI does: a board description plus a
//! side to move in, one formatted response line out.

use reversi::{BitBoard, Engine, Phase, Side, Strength};

const START: &str = "+++++++++++++++++++++++++++OX++++++XO+++++++++++++++++++++++++++";

#[test]
fn test_opening_response_shape() {
    let bd = BitBoard::parse(START).unwrap();
    let engine = Engine::new(Side::Black, Strength::Weak);
    let result = engine.compute_move(&bd);
    let line = result.to_string();

    assert!(line.contains(" { 'value': "));
    assert!(line.contains(", 'depth': "));
    assert!(line.contains(", 'nodes': "));
    assert!(line.contains(", 'time': "));
    assert!(line.contains(", 'NPS': "));
    assert!(line.ends_with(" }"));

    // col-then-row coordinates of the four legal opening moves.
    let coords = &line[..2];
    assert!(["32", "23", "54", "45"].contains(&coords), "got {}", coords);
}

#[test]
fn test_white_opening_moves() {
    let bd = BitBoard::parse(START).unwrap();
    let engine = Engine::new(Side::White, Strength::Weak);
    let result = engine.compute_move(&bd);
    assert!([20, 29, 34, 43].contains(&result.best_move.unwrap()));
}

#[test]
fn test_endgame_response_line() {
    // All black except a lone white disk at g8 and the empty h8 corner.
    let mut cells = "X".repeat(62);
    cells.push_str("O+");
    let bd = BitBoard::parse(&cells).unwrap();

    let engine = Engine::new(Side::Black, Strength::Strong);
    let result = engine.compute_move(&bd);
    let line = result.to_string();

    assert!(
        line.starts_with("77 { 'value': +64, 'depth': 1, 'nodes': 2, 'time': "),
        "got {}",
        line
    );
}

#[test]
fn test_pass_response_line() {
    // Black's only disk cannot move anywhere; the root is a forced pass.
    let mut cells = String::from("OX");
    cells.push_str(&"+".repeat(62));
    let bd = BitBoard::parse(&cells).unwrap();

    let engine = Engine::new(Side::Black, Strength::Strong);
    let result = engine.compute_move(&bd);
    assert_eq!(result.phase, Phase::Midgame);
    assert_eq!(result.best_move, None);

    let line = result.to_string();
    assert!(
        line.starts_with("PASS { 'value': -0.07, 'depth': 1, 'nodes': 3, 'time': "),
        "got {}",
        line
    );
}

#[test]
fn test_malformed_requests_are_rejected() {
    assert!(BitBoard::parse("too short").is_err());
    let bad = format!("{}#", "+".repeat(63));
    assert!(BitBoard::parse(&bad).is_err());
}

#[test]
fn test_self_play_runs_to_completion() {
    let mut bd = BitBoard::parse(START).unwrap();
    let mut side = Side::Black;
    let mut passes = 0;

    for _turn in 0..200 {
        if !bd.has_valid_move(side) {
            passes += 1;
            if passes == 2 {
                break;
            }
            side = side.opponent();
            continue;
        }
        passes = 0;

        let engine = Engine::new(side, Strength::Weak);
        let result = engine.compute_move(&bd);
        let loc = result.best_move.expect("side to move has a legal move");
        assert!(bd.is_valid_loc(side, loc), "engine chose an illegal move");

        bd.put(side, loc);
        assert_eq!(bd.disks(Side::Black) & bd.disks(Side::White), 0);
        side = side.opponent();
    }

    assert!(!bd.has_valid_move(Side::Black));
    assert!(!bd.has_valid_move(Side::White));
}
