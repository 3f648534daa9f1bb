//! `verso-othello` is a compact Othello library for engines and match harnesses.
//!
//! Two levels of abstraction:
//!
//!  - [`bitboard`] contains the raw, unchecked mask operations: legal-move
//!    generation and disc flipping as `u64` shifts. Fast, but inconsistent
//!    state results if their contracts are not manually upheld.
//!  - [`Board`] wraps the masks into a typed board, and [`Game`] adds color,
//!    turn tracking and move validation. Engines and harnesses should prefer
//!    [`Game`]; hot loops can drop down to [`Board`].

pub mod bitboard;
pub mod test_utils;

mod board;
mod game;
mod location;
mod utils;

pub use board::*;
pub use game::*;
pub use location::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
