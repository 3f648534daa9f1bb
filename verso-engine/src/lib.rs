//! `verso-engine` chooses Othello moves with a fixed-depth minimax search.
//!
//! The searcher walks every line of play up to a depth limit, scores the
//! horizon with a pluggable [`Evaluate`] strategy, and prunes lines that
//! provably cannot change the decision. It is deliberately plain: no
//! transposition tables, no iterative deepening, no internal clock — a
//! caller that wants a wall-clock budget runs the search on its own thread
//! and abandons the result.
//!
//! [`agent`] and [`session`] wrap the search into something a match harness
//! can drive end to end.

pub mod agent;
pub mod eval;
pub mod position;
pub mod search;
pub mod session;

pub use agent::{Agent, MinimaxAgent, RandomAgent};
pub use eval::{Composite, DiscCount, Evaluate, WeightTable};
pub use position::Position;
pub use search::{Minimax, SearchResult, SCORE_LIMIT};
pub use session::{Outcome, RogueAgentError, Session};

use verso_othello::{Game, Location};

/// Choose a move for the side on turn, with the default composite evaluation.
pub fn decide_move(game: &Game, depth_limit: i32) -> SearchResult<Location> {
    Minimax::new(Composite).decide(game, depth_limit)
}
