//! Static evaluation strategies.
//!
//! A single [`Evaluate`] implementation is injected into the searcher and
//! called wherever a line stops, whether the game actually ended there or
//! the depth budget ran out. All scores are from Black's point of view:
//! positive favors Black.

use crate::position::Position;
use verso_othello::bitboard::Bitboard;
use verso_othello::{Game, Player};

/// A static evaluation of a position.
///
/// Implementations must be pure functions of the position, and must keep
/// their scores strictly inside the window seeded by
/// [`SCORE_LIMIT`](crate::search::SCORE_LIMIT); the search does not defend
/// against an evaluator that reaches it.
pub trait Evaluate<P: Position> {
    fn evaluate(&self, position: &P) -> i32;
}

// The four corner squares, and the full border including them. A corner
// disc counts in both masks, so it is worth 1 + CORNER_WEIGHT + EDGE_WEIGHT
// in total.
const CORNER_MASK: u64 = 0x8100000000000081;
const EDGE_MASK: u64 = 0xff818181818181ff;

const CORNER_WEIGHT: i32 = 8;
const EDGE_WEIGHT: i32 = 5;
const MOBILITY_WEIGHT: i32 = 3;

fn disc_difference(game: &Game) -> i32 {
    i32::from(game.count_discs(Player::Black)) - i32::from(game.count_discs(Player::White))
}

fn masked_count(discs: Bitboard, mask: u64) -> i32 {
    (u64::from(discs) & mask).count_ones() as i32
}

/// Plain disc differential. The weakest of the family, but the cheapest,
/// and the easiest to reason about in tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiscCount;

impl Evaluate<Game> for DiscCount {
    fn evaluate(&self, game: &Game) -> i32 {
        disc_difference(game)
    }
}

/// Disc, corner, edge and mobility differentials under fixed weights.
///
/// Bounded by 64 + 8·4 + 5·28 + 3·(worst-case mobility), comfortably inside
/// the search window.
#[derive(Clone, Copy, Debug, Default)]
pub struct Composite;

impl Evaluate<Game> for Composite {
    fn evaluate(&self, game: &Game) -> i32 {
        let black = game.discs(Player::Black);
        let white = game.discs(Player::White);

        let corners = masked_count(black, CORNER_MASK) - masked_count(white, CORNER_MASK);
        let edges = masked_count(black, EDGE_MASK) - masked_count(white, EDGE_MASK);
        let mobility =
            game.mobility(Player::Black) as i32 - game.mobility(Player::White) as i32;

        disc_difference(game)
            + CORNER_WEIGHT * corners
            + EDGE_WEIGHT * edges
            + MOBILITY_WEIGHT * mobility
    }
}

// Square weights in row-major order from A1. Corners dominate, squares
// adjacent to an unclaimed corner are liabilities.
#[rustfmt::skip]
const SQUARE_WEIGHTS: [i32; 64] = [
    20, -3, 11,  8,  8, 11, -3, 20,
    -3, -7, -4,  1,  1, -4, -7, -3,
    11, -4,  2,  2,  2,  2, -4, 11,
     8,  1,  2, -3, -3,  2,  1,  8,
     8,  1,  2, -3, -3,  2,  1,  8,
    11, -4,  2,  2,  2,  2, -4, 11,
    -3, -7, -4,  1,  1, -4, -7, -3,
    20, -3, 11,  8,  8, 11, -3, 20,
];

/// Positional variant: each occupied square contributes a fixed weight,
/// signed by its owner.
#[derive(Clone, Copy, Debug, Default)]
pub struct WeightTable;

impl Evaluate<Game> for WeightTable {
    fn evaluate(&self, game: &Game) -> i32 {
        table_sum(game.discs(Player::Black)) - table_sum(game.discs(Player::White))
    }
}

fn table_sum(discs: Bitboard) -> i32 {
    // Bitboard iteration is row-major from A1, matching the table layout.
    discs
        .into_iter()
        .zip(SQUARE_WEIGHTS.iter())
        .filter(|(occupied, _)| *occupied)
        .map(|(_, &weight)| weight)
        .sum()
}
