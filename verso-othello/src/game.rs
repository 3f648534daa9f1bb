//! Game-level Othello logic: colors, actions, and the full game state.
//!
//! [`Board`] knows nothing about color or legality; [`Game`] pins the active
//! side to a [`Player`] and validates actions, which is what engines and
//! harnesses should build against.

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::location::{Location, MoveList};
use derive_more::{Display, Error};
use std::fmt;

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Player {
    Black,
    White,
}

impl Default for Player {
    /// Gets the starting player (Black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => f.write_str("Black"),
            Player::White => f.write_str("White"),
        }
    }
}

#[derive(Debug, PartialEq, Display, Error)]
#[display(fmt = "invalid player string")]
pub struct ParsePlayerError;

impl std::str::FromStr for Player {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "black" => Ok(Player::Black),
            "white" => Ok(Player::White),
            _ => Err(ParsePlayerError),
        }
    }
}

/// An action available to the active player: place a disc, or pass.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Move {
    Place(Location),
    Pass,
}

impl From<Location> for Move {
    fn from(loc: Location) -> Self {
        Self::Place(loc)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Place(loc) => loc.fmt(f),
            Move::Pass => f.write_str("PASS"),
        }
    }
}

#[derive(Debug, PartialEq, Display, Error)]
#[display(fmt = "invalid move string")]
pub struct ParseMoveError;

/// Parse a [`Move`] from notation: "PASS" or a location like "D3".
impl std::str::FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("pass") {
            return Ok(Move::Pass);
        }
        let loc: Location = s.parse().or(Err(ParseMoveError))?;
        Ok(Move::Place(loc))
    }
}

/// Returned when a [`Move`] is not legal in the state it was applied to.
#[derive(Debug, PartialEq, Display, Error)]
#[display(fmt = "illegal move")]
pub struct IllegalMoveError;

/// The complete state of an Othello game.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Game {
    pub board: Board,
    pub active_player: Player,
}

impl Default for Game {
    /// Gets the starting position, Black to move.
    fn default() -> Self {
        Self::new(Board::new(), Player::Black)
    }
}

impl Game {
    /// Construct a game state from a board (seen from `active_player`'s
    /// perspective) and the player on turn.
    pub fn new(board: Board, active_player: Player) -> Self {
        Self {
            board,
            active_player,
        }
    }

    /// Get the legal moves for the active player.
    #[inline]
    pub fn get_moves(self) -> MoveList {
        self.board.get_moves()
    }

    /// Hand the turn to the opponent without placing a disc.
    #[inline]
    pub fn pass(self) -> Self {
        Self {
            board: self.board.pass(),
            active_player: !self.active_player,
        }
    }

    /// Place a disc for the active player without checking legality.
    /// `loc` must be one of [`Game::get_moves`].
    #[inline]
    pub fn make_move(self, loc: Location) -> Self {
        Self {
            board: self.board.make_move(loc),
            active_player: !self.active_player,
        }
    }

    /// Apply an action for the active player, checking that it is legal:
    /// a placement must be a legal move, a pass requires having none.
    pub fn apply_move(self, mv: Move) -> Result<Self, IllegalMoveError> {
        match mv {
            Move::Pass if self.get_moves().is_empty() => Ok(self.pass()),
            Move::Place(loc) if self.get_moves().contains(loc) => Ok(self.make_move(loc)),
            _ => Err(IllegalMoveError),
        }
    }

    /// The game ends when neither side has a legal move anywhere.
    pub fn is_finished(self) -> bool {
        self.get_moves().is_empty() && self.board.pass().get_moves().is_empty()
    }

    /// The discs the given player has on the board.
    pub fn discs(self, player: Player) -> Bitboard {
        if player == self.active_player {
            self.board.active_bitboard
        } else {
            self.board.opponent_bitboard
        }
    }

    /// Count the discs the given player has on the board.
    pub fn count_discs(self, player: Player) -> u8 {
        self.discs(player).count_occupied()
    }

    /// Count the legal moves the given player would have on turn.
    pub fn mobility(self, player: Player) -> usize {
        if player == self.active_player {
            self.get_moves().len()
        } else {
            self.board.pass().get_moves().len()
        }
    }

    /// The player holding more discs, or `None` on a tie.
    pub fn winner(self) -> Option<Player> {
        match self.board.score_absolute_difference() {
            difference if difference > 0 => Some(self.active_player),
            difference if difference < 0 => Some(!self.active_player),
            _ => None,
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let black = self.discs(Player::Black).into_iter();
        let white = self.discs(Player::White).into_iter();

        crate::utils::format_grid(
            black.zip(white).map(|discs| match discs {
                (true, false) => 'X',
                (false, true) => 'O',
                (false, false) => '.',
                (true, true) => '?',
            }),
            f,
        )?;
        write!(f, "\n{} to move\n", self.active_player)
    }
}
