//! Move-deciding agents that can sit on either side of a [`Session`].
//!
//! [`Session`]: crate::session::Session

use crate::eval::Evaluate;
use crate::search::Minimax;
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;
use verso_othello::{Game, Move};

/// Something that can pick an action when it is on turn.
///
/// Implementations must return [`Move::Pass`] exactly when they have no
/// legal move; the session validates every action it is handed.
pub trait Agent {
    fn decide_move(&mut self, game: &Game) -> Move;
}

/// Plays whatever a fixed-depth minimax search chooses.
pub struct MinimaxAgent<E> {
    search: Minimax<E>,
    depth: i32,
}

impl<E> MinimaxAgent<E> {
    /// Search `depth` plies ahead with `evaluator` at the horizon. At least
    /// one ply is always searched, so the agent never passes while it still
    /// has a legal move.
    pub fn new(evaluator: E, depth: i32) -> Self {
        Self {
            search: Minimax::new(evaluator),
            depth: depth.max(1),
        }
    }
}

impl<E: Evaluate<Game>> Agent for MinimaxAgent<E> {
    fn decide_move(&mut self, game: &Game) -> Move {
        match self.search.decide(game, self.depth).best_move {
            Some(loc) => Move::Place(loc),
            None => Move::Pass,
        }
    }
}

/// Picks uniformly among the legal moves. A useful baseline opponent.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn decide_move(&mut self, game: &Game) -> Move {
        match game.get_moves().choose(&mut self.rng) {
            Some(loc) => Move::Place(loc),
            None => Move::Pass,
        }
    }
}
