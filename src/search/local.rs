//! Local search ([hill climbing]) for both player decisions.
//!
//! Each decision starts from a random candidate and repeatedly proposes a
//! neighbor: a cell with one coordinate replaced or a piece with one attribute
//! flipped. A neighbor replaces the current candidate only if it is strictly
//! better; the search gives up after [`NO_IMPROVEMENT_BUDGET`] consecutive
//! proposals fail to improve.
//!
//! The random source is always passed in by the caller, so a seeded generator
//! reproduces every decision exactly.
//!
//! [hill climbing]: https://en.wikipedia.org/wiki/Hill_climbing

use rand::Rng;

use crate::evaluation::{evaluate_placement, Placement};
use crate::quarto::{Attributes, Cell, Game, Piece, BOARD_WIDTH};

/// Number of consecutive non-improving proposals after which the climb stops.
pub const NO_IMPROVEMENT_BUDGET: u8 = 5;

/// Probability of proposing an actual neighbor instead of the current
/// candidate.
pub const TWEAK_PROBABILITY: f64 = 0.7;

/// Generic hill climbing loop: `improves(candidate, current)` decides whether
/// a proposal replaces the current candidate.
fn climb<C, S, R>(
    start: C,
    rng: &mut R,
    mut tweak: impl FnMut(C, &mut R) -> C,
    mut evaluate: impl FnMut(C) -> S,
    improves: impl Fn(S, S) -> bool,
) -> C
where
    C: Copy,
    S: Copy,
    R: Rng + ?Sized,
{
    let mut current = start;
    let mut current_score = evaluate(current);
    let mut useless_steps = 0;
    while useless_steps < NO_IMPROVEMENT_BUDGET {
        useless_steps += 1;
        let candidate = tweak(current, &mut *rng);
        let candidate_score = evaluate(candidate);
        if improves(candidate_score, current_score) {
            current = candidate;
            current_score = candidate_score;
            useless_steps = 0;
        }
    }
    current
}

/// Picks a cell uniformly at random.
pub fn random_cell<R: Rng + ?Sized>(rng: &mut R) -> Cell {
    let x = rng.gen_range(0..BOARD_WIDTH);
    let y = rng.gen_range(0..BOARD_WIDTH);
    Cell::new(x, y).unwrap_or_else(|| unreachable!("coordinates are sampled on the board"))
}

/// Proposes a neighboring cell: with [`TWEAK_PROBABILITY`] one of the
/// coordinates is replaced with a random value.
fn tweak_cell<R: Rng + ?Sized>(cell: Cell, rng: &mut R) -> Cell {
    if !rng.gen_bool(TWEAK_PROBABILITY) {
        return cell;
    }
    let replace_x = rng.gen_bool(0.5);
    let value = rng.gen_range(0..BOARD_WIDTH);
    let neighbor = if replace_x {
        Cell::new(value, cell.y())
    } else {
        Cell::new(cell.x(), value)
    };
    neighbor.unwrap_or(cell)
}

/// Climbs from `start` towards the cell where the selected piece forms the
/// best line according to [`evaluate_placement`].
///
/// The result is not necessarily empty: occupied cells only score 0, so the
/// climb moves away from them whenever it finds anything better.
pub fn climb_placement<R: Rng + ?Sized>(game: &Game, start: Cell, rng: &mut R) -> Cell {
    climb(
        start,
        rng,
        tweak_cell,
        |cell| evaluate_placement(game, cell, None).score,
        |candidate, current| candidate > current,
    )
}

/// Chooses a cell for the selected piece by climbing from a random cell.
pub fn place_piece<R: Rng + ?Sized>(game: &Game, rng: &mut R) -> Cell {
    let start = random_cell(rng);
    climb_placement(game, start, rng)
}

/// How desirable handing a piece over to the opponent is, see
/// [`evaluate_choice`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Handover {
    /// Best [`Placement::score`] the opponent can reach with the piece, or
    /// [`Handover::LOSING`] if the opponent can win with it.
    pub score: i16,
    /// Number of attributes shared by the best nearly complete line the
    /// opponent can build. Only meaningful when `score` is
    /// [`Placement::ALMOST_QUARTO`].
    pub shared: u32,
}

impl Handover {
    /// Score of a piece that lets the opponent complete a line.
    pub const LOSING: i16 = -1;

    /// Returns `true` if handing over this piece is preferable to `other`.
    ///
    /// Between two pieces that both let the opponent build three aligned
    /// pieces, the one whose line shares more attributes is preferred.
    #[must_use]
    pub fn improves(self, other: Self) -> bool {
        self.score > other.score
            || (self.score == other.score
                && self.score == i16::from(Placement::ALMOST_QUARTO)
                && self.shared > other.shared)
    }

    /// Returns `true` if the opponent can win with the piece right away.
    #[must_use]
    pub const fn is_losing(self) -> bool {
        self.score == Self::LOSING
    }
}

/// Scores handing `piece` to the opponent by evaluating every cell they could
/// place it on. Pieces that cannot be selected score 0.
#[must_use]
pub fn evaluate_choice(game: &Game, piece: Piece) -> Handover {
    let mut next = *game;
    let mut best = Handover {
        score: 0,
        shared: 0,
    };
    if !next.select(piece) {
        return best;
    }
    for cell in Cell::all() {
        let placement = evaluate_placement(&next, cell, None);
        if placement.is_quarto() {
            return Handover {
                score: Handover::LOSING,
                shared: 0,
            };
        }
        let score = i16::from(placement.score);
        if score > best.score {
            best = Handover { score, shared: 0 };
        }
        if score == best.score && placement.score == Placement::ALMOST_QUARTO {
            best.shared = best.shared.max(placement.shared.bits().count_ones());
        }
    }
    best
}

/// Draws each attribute independently with probability 1/2.
fn random_piece<R: Rng + ?Sized>(rng: &mut R) -> Piece {
    let attributes = Attributes::EACH
        .into_iter()
        .filter(|_| rng.gen_bool(0.5))
        .fold(Attributes::empty(), |piece, attribute| piece | attribute);
    Piece::from_attributes(attributes)
}

/// Picks a random piece that is not on the board yet by rejection sampling.
/// If every piece is on the board, returns any piece.
pub fn random_available_piece<R: Rng + ?Sized>(game: &Game, rng: &mut R) -> Piece {
    loop {
        let piece = random_piece(rng);
        if !game.board().is_used(piece) || game.board().is_full() {
            return piece;
        }
    }
}

/// Proposes a neighboring piece: with [`TWEAK_PROBABILITY`] one random
/// attribute is flipped.
fn tweak_piece<R: Rng + ?Sized>(piece: Piece, rng: &mut R) -> Piece {
    if !rng.gen_bool(TWEAK_PROBABILITY) {
        return piece;
    }
    let attribute = Attributes::EACH[rng.gen_range(0..Attributes::EACH.len())];
    piece.flip(attribute)
}

/// Best available piece according to [`Handover::improves`], scanning pieces in
/// index order.
fn best_available_piece(game: &Game) -> Option<(Piece, Handover)> {
    let mut best: Option<(Piece, Handover)> = None;
    for piece in game.available_pieces() {
        let handover = evaluate_choice(game, piece);
        if best.map_or(true, |(_, best)| handover.improves(best)) {
            best = Some((piece, handover));
        }
    }
    best
}

/// Climbs from `start` towards the piece that is safest to hand to the
/// opponent.
///
/// A short climb can end on a piece that is already on the board or one that
/// lets the opponent win. In both cases, the best available piece is returned
/// instead if it is an improvement, so a winning piece is never handed over
/// while a safe one exists.
pub fn climb_choice<R: Rng + ?Sized>(game: &Game, start: Piece, rng: &mut R) -> Piece {
    let climbed = climb(
        start,
        rng,
        tweak_piece,
        |piece| evaluate_choice(game, piece),
        Handover::improves,
    );
    let unusable = game.board().is_used(climbed);
    if !unusable && !evaluate_choice(game, climbed).is_losing() {
        return climbed;
    }
    match best_available_piece(game) {
        Some((piece, handover)) if unusable || !handover.is_losing() => piece,
        _ => climbed,
    }
}

/// Chooses the piece to hand over by climbing from a random available piece.
pub fn choose_piece<R: Rng + ?Sized>(game: &Game, rng: &mut R) -> Piece {
    let start = random_available_piece(game, rng);
    climb_choice(game, start, rng)
}
