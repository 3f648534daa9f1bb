//! End-to-end checks of the searcher over real board positions.

use verso_engine::{
    decide_move, Agent, Composite, DiscCount, Evaluate, Minimax, MinimaxAgent, RandomAgent,
    SearchResult, Session,
};
use verso_othello::{Board, Game, Location, Move, Player};

fn black_to_move(board: &str) -> Game {
    Game::new(board.parse::<Board>().unwrap(), Player::Black)
}

/// Black walled in on A1..D1; White can still move. Black must pass.
const BLACK_MUST_PASS: &str =
    "-XOX------------------------------------------------------------";

/// Two lone discs that can never interact: the game is over.
const DEAD_BOARD: &str =
    "XX-------------------------------------------------------------O";

#[test]
fn depth_zero_returns_the_static_evaluation() {
    let game = Game::default();
    let result = Minimax::new(DiscCount).choose_move(&game, Player::Black, 0);
    assert_eq!(result, SearchResult { best_move: None, score: 0 });

    // Same at depth zero for the richer evaluators, moves or not.
    let result = Minimax::new(Composite).choose_move(&game, Player::Black, 0);
    assert_eq!(result, SearchResult { best_move: None, score: Composite.evaluate(&game) });
}

#[test]
fn finished_game_scores_identically_at_any_depth() {
    let game = black_to_move(DEAD_BOARD);
    assert!(game.is_finished());

    let searcher = Minimax::new(DiscCount);
    for &depth in &[0, 1, 4, 8] {
        let result = searcher.choose_move(&game, Player::Black, depth);
        assert_eq!(result, SearchResult { best_move: None, score: 1 });
    }
}

#[test]
fn forced_pass_spends_one_ply() {
    let game = black_to_move(BLACK_MUST_PASS);
    assert!(game.get_moves().is_empty());
    assert!(!game.is_finished());

    // One ply pays for the pass, so White is scored with no lookahead.
    let searcher = Minimax::new(DiscCount);
    let shallow = searcher.choose_move(&game, Player::Black, 1);
    assert_eq!(shallow, SearchResult { best_move: None, score: 1 });

    // With three plies, White gets to pick the reply that blocks Black's
    // recapture: A1 (leaving Black stuck and down 1-3) beats E1 (which
    // offers Black a five-disc sweep at F1).
    let deep = searcher.choose_move(&game, Player::Black, 3);
    assert_eq!(deep, SearchResult { best_move: None, score: -2 });
}

#[test]
fn ties_break_toward_the_first_listed_move() {
    // Every opening flips exactly one disc, so disc count ties all four;
    // the first move in list order (E6) must win.
    let result = Minimax::new(DiscCount).choose_move(&Game::default(), Player::Black, 1);
    let expected: Location = "E6".parse().unwrap();
    assert_eq!(result, SearchResult { best_move: Some(expected), score: 3 });
}

#[test]
fn minimizer_chooses_for_white() {
    let opening: Location = "D3".parse().unwrap();
    let game = Game::default().make_move(opening);
    assert_eq!(game.active_player, Player::White);

    // All three replies recapture one disc (an even count); the first in
    // list order is C5.
    let result = Minimax::new(DiscCount).choose_move(&game, Player::White, 1);
    let expected: Location = "C5".parse().unwrap();
    assert_eq!(result, SearchResult { best_move: Some(expected), score: 0 });
}

#[test]
fn search_is_deterministic() {
    let opening: Location = "D3".parse().unwrap();
    let game = Game::default().make_move(opening);

    let searcher = Minimax::new(Composite);
    let first = searcher.decide(&game, 4);
    let second = searcher.decide(&game, 4);
    assert_eq!(first, second);
    assert!(first.best_move.is_some());
}

#[test]
fn decide_move_returns_a_legal_move() {
    let game = Game::default();
    let result = decide_move(&game, 2);

    let chosen = result.best_move.expect("the opening has legal moves");
    assert!(game.get_moves().contains(chosen));
    assert!(result.score.abs() < verso_engine::SCORE_LIMIT);
}

#[test]
fn minimax_agent_passes_only_when_stuck() {
    let mut agent = MinimaxAgent::new(Composite, 3);

    let stuck = black_to_move(BLACK_MUST_PASS);
    assert_eq!(agent.decide_move(&stuck), Move::Pass);
    assert!(stuck.apply_move(Move::Pass).is_ok());

    match agent.decide_move(&Game::default()) {
        Move::Place(loc) => assert!(Game::default().get_moves().contains(loc)),
        Move::Pass => panic!("agent passed with moves available"),
    }
}

#[test]
fn session_runs_to_completion() {
    let mut black = MinimaxAgent::new(Composite, 3);
    let mut white = RandomAgent::new(7);

    let mut session = Session::new(&mut black, &mut white);
    let outcome = session.play().expect("both agents play legal moves");

    let total = u32::from(outcome.black_discs) + u32::from(outcome.white_discs);
    assert!(total <= 64);
    assert!(session.game().is_finished());

    match outcome.winner {
        Some(Player::Black) => assert!(outcome.black_discs > outcome.white_discs),
        Some(Player::White) => assert!(outcome.white_discs > outcome.black_discs),
        None => assert_eq!(outcome.black_discs, outcome.white_discs),
    }
}
