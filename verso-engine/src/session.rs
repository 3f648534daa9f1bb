//! Running a full game between two agents.
//!
//! A [`Session`] owns its game state outright; nothing about a running
//! match is global, so independent sessions can run side by side (one per
//! thread, one per tournament slot) without coordination.

use crate::agent::Agent;
use derive_more::{Display, Error};
use verso_othello::{Game, Player};

/// Final standing of a finished game.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Outcome {
    pub winner: Option<Player>,
    pub black_discs: u8,
    pub white_discs: u8,
}

/// Returned when an agent proposes an action that is illegal in the
/// current state. The game cannot meaningfully continue past this.
#[derive(Clone, Copy, Debug, Display, Error)]
#[display(fmt = "agent playing {} proposed an illegal move", player)]
pub struct RogueAgentError {
    pub player: Player,
}

/// A single game between two agents.
pub struct Session<'a> {
    game: Game,
    black: &'a mut dyn Agent,
    white: &'a mut dyn Agent,
}

impl<'a> Session<'a> {
    /// Set up a fresh game, Black to move first.
    pub fn new(black: &'a mut dyn Agent, white: &'a mut dyn Agent) -> Self {
        Self {
            game: Game::default(),
            black,
            white,
        }
    }

    /// The current game state.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Alternate turns until neither side can move, validating every action.
    pub fn play(&mut self) -> Result<Outcome, RogueAgentError> {
        while !self.game.is_finished() {
            let player = self.game.active_player;
            let agent = match player {
                Player::Black => &mut *self.black,
                Player::White => &mut *self.white,
            };

            let mv = agent.decide_move(&self.game);
            self.game = self
                .game
                .apply_move(mv)
                .or(Err(RogueAgentError { player }))?;
        }

        Ok(Outcome {
            winner: self.game.winner(),
            black_discs: self.game.count_discs(Player::Black),
            white_discs: self.game.count_discs(Player::White),
        })
    }
}
