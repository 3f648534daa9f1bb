//! Othello board dynamics, seen from the active player's perspective.
//!
//! A [`Board`] carries no color information: "active" is whichever side
//! moves next. Making a move (or passing) returns the successor board from
//! the *next* player's perspective; nothing is ever mutated in place.

use crate::bitboard::{self, Bitboard, BLACK_START, WHITE_START};
use crate::location::{Location, MoveList};
use crate::utils;
use crate::NUM_SPACES;
use derive_more::{Display, Error};
use std::fmt;

/// A pair of bitboards storing the discs of the active player and the opponent.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Board {
    pub active_bitboard: Bitboard,
    pub opponent_bitboard: Bitboard,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The starting board, from the starting (Black) player's perspective.
    pub fn new() -> Self {
        Self {
            active_bitboard: BLACK_START,
            opponent_bitboard: WHITE_START,
        }
    }

    /// Hand the turn to the opponent without placing a disc.
    #[inline]
    pub fn pass(self) -> Self {
        Self {
            active_bitboard: self.opponent_bitboard,
            opponent_bitboard: self.active_bitboard,
        }
    }

    /// Get the legal moves for the active player.
    #[inline]
    pub fn get_moves(self) -> MoveList {
        MoveList::from(bitboard::get_move_mask(
            self.active_bitboard,
            self.opponent_bitboard,
        ))
    }

    /// Place a disc for the active player at `loc`, returning the successor
    /// board from the next player's perspective. `loc` must be a legal move.
    #[inline]
    pub fn make_move(self, loc: Location) -> Self {
        let (active, opponent) =
            bitboard::apply_move(self.active_bitboard, self.opponent_bitboard, loc.into());
        Self {
            active_bitboard: opponent,
            opponent_bitboard: active,
        }
    }

    /// Score the board as: # my discs - # opponent discs.
    #[inline]
    pub fn score_absolute_difference(self) -> i8 {
        (self.active_bitboard.count_occupied() as i8)
            - (self.opponent_bitboard.count_occupied() as i8)
    }
}

#[derive(Debug, PartialEq, Display, Error)]
#[display(fmt = "invalid board string")]
pub struct ParseBoardError;

/// Build a [`Board`] from a 64-character row-major string, active player's
/// discs as 'X', opponent's as 'O', empties as '-' or '.'.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut active = 0u64;
        let mut opponent = 0u64;
        let mut count = 0;

        for (position, square) in s.chars().enumerate() {
            count += 1;
            if count > NUM_SPACES {
                return Err(ParseBoardError);
            }

            let mask = 1u64 << (63 - position);
            match square {
                'X' => active |= mask,
                'O' => opponent |= mask,
                '-' | '.' => {}
                _ => return Err(ParseBoardError),
            }
        }

        if count != NUM_SPACES {
            return Err(ParseBoardError);
        }

        Ok(Self {
            active_bitboard: Bitboard::from(active),
            opponent_bitboard: Bitboard::from(opponent),
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let active = self.active_bitboard.into_iter();
        let opponent = self.opponent_bitboard.into_iter();

        utils::format_grid(
            active.zip(opponent).map(|discs| match discs {
                (true, false) => '#',
                (false, true) => 'O',
                (false, false) => '.',
                (true, true) => '?',
            }),
            f,
        )
    }
}
