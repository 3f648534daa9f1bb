//! The game-tree abstraction the searcher works against.

use verso_othello::{Game, Location, MoveList, Player};

/// A position in a two-player, perfect-information, zero-sum game.
///
/// By convention [`Player::Black`] is the maximizing side. Deriving a
/// successor never touches `self`: every child is a fresh value, so sibling
/// branches of a search can never alias each other's state.
pub trait Position: Sized {
    /// An opaque identifier for a legal action. The search stores and
    /// returns moves but never inspects them.
    type Move: Copy + Eq;

    /// An iterable list of legal moves, in a deterministic order.
    type Moves: IntoIterator<Item = Self::Move>;

    /// The side whose turn it is.
    fn side_to_move(&self) -> Player;

    /// The legal moves for the side to move. May be empty while the game
    /// continues, if only this side is blocked.
    fn legal_moves(&self) -> Self::Moves;

    /// True once neither side has a legal move anywhere from here on.
    fn is_terminal(&self) -> bool;

    /// The position after the side to move plays `mv`.
    fn successor(&self, mv: Self::Move) -> Self;

    /// The same position with the turn handed to the opponent.
    fn pass(&self) -> Self;
}

impl Position for Game {
    type Move = Location;
    type Moves = MoveList;

    fn side_to_move(&self) -> Player {
        self.active_player
    }

    fn legal_moves(&self) -> MoveList {
        self.get_moves()
    }

    fn is_terminal(&self) -> bool {
        self.is_finished()
    }

    fn successor(&self, mv: Location) -> Game {
        self.make_move(mv)
    }

    fn pass(&self) -> Game {
        Game::pass(*self)
    }
}
