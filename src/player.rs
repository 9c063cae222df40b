//! Players make the two decisions of a Quarto turn: which piece the opponent
//! has to place and where to put the piece they were given.
//!
//! Players only propose moves. Legality is checked by [`Game::select`] and
//! [`Game::place`] when the driver commits the decision, see
//! [`crate::tournament::play`].

use rand::Rng;

use crate::quarto::{Attributes, Cell, Game, Piece};
use crate::search::minimax::Search;
use crate::search::{local, Limits};

/// A participant of a Quarto game.
pub trait Player {
    /// Short human-readable identifier used in logs and summaries.
    fn name(&self) -> &str;

    /// Picks the piece the opponent will have to place. Called when no piece
    /// is selected.
    fn choose_piece(&mut self, game: &Game) -> Piece;

    /// Picks the cell for the selected piece.
    fn place_piece(&mut self, game: &Game) -> Cell;
}

/// Proposes uniformly random pieces and cells, including illegal ones.
#[derive(Debug)]
pub struct RandomPlayer<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomPlayer<R> {
    #[allow(missing_docs)]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Player for RandomPlayer<R> {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_piece(&mut self, _game: &Game) -> Piece {
        Piece::from_index(self.rng.gen_range(0..Piece::COUNT as u8))
            .unwrap_or_else(|| unreachable!("indices are sampled below the piece count"))
    }

    fn place_piece(&mut self, _game: &Game) -> Cell {
        local::random_cell(&mut self.rng)
    }
}

/// Hill climbing over cells and pieces scored by the line evaluator, see
/// [`local`].
#[derive(Debug)]
pub struct HillClimber<R: Rng> {
    rng: R,
}

impl<R: Rng> HillClimber<R> {
    #[allow(missing_docs)]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Player for HillClimber<R> {
    fn name(&self) -> &str {
        "hill-climber"
    }

    fn choose_piece(&mut self, game: &Game) -> Piece {
        let piece = local::choose_piece(game, &mut self.rng);
        tracing::debug!(%piece, handover = ?local::evaluate_choice(game, piece), "chose piece");
        piece
    }

    fn place_piece(&mut self, game: &Game) -> Cell {
        let cell = local::place_piece(game, &mut self.rng);
        tracing::debug!(%cell, "placing piece");
        cell
    }
}

/// Deterministic bounded alpha-beta search, see [`crate::search::minimax`].
#[derive(Debug)]
pub struct MinMax {
    search: Search,
}

impl MinMax {
    #[allow(missing_docs)]
    #[must_use]
    pub fn new(limits: Limits) -> Self {
        Self {
            search: Search::new(limits),
        }
    }
}

impl Default for MinMax {
    fn default() -> Self {
        Self::new(Limits::default())
    }
}

impl Player for MinMax {
    fn name(&self) -> &str {
        "minmax"
    }

    fn choose_piece(&mut self, game: &Game) -> Piece {
        let (piece, score) = self.search.choose_piece(game);
        tracing::debug!(?piece, %score, stats = ?self.search.stats(), "searched pieces");
        // Search finds nothing only when there is nothing to choose from.
        piece
            .or_else(|| game.available_pieces().next())
            .unwrap_or_else(|| Piece::from_attributes(Attributes::empty()))
    }

    fn place_piece(&mut self, game: &Game) -> Cell {
        let (cell, score) = self.search.place_piece(game);
        tracing::debug!(?cell, %score, stats = ?self.search.stats(), "searched cells");
        // The driver rejects placements on a full board, any cell will do.
        cell.or_else(|| game.board().empty_cells().next())
            .or_else(|| Cell::all().next())
            .unwrap_or_else(|| unreachable!("the board has cells"))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn setup(notation: &str) -> Game {
        Game::from_notation(notation).expect("parsing valid game")
    }

    #[test]
    fn random_player_covers_everything() {
        let mut player = RandomPlayer::new(StdRng::seed_from_u64(3));
        let game = Game::new();
        let mut pieces = [false; Piece::COUNT];
        for _ in 0..1000 {
            pieces[usize::from(player.choose_piece(&game).index())] = true;
        }
        assert!(pieces.iter().all(|&seen| seen));
    }

    #[test]
    fn minmax_takes_win() {
        let mut player = MinMax::default();
        assert_eq!(
            player.place_piece(&setup("8.../9.../a.../.... b")),
            Cell::new(0, 3).unwrap()
        );
    }

    #[test]
    fn minmax_fills_last_cell() {
        let mut player = MinMax::default();
        let game = setup("0f1e/3c2d/5a4b/697. 8");
        let mut next = game;
        assert!(next.place(player.place_piece(&game)));
        assert!(next.board().is_full());
    }

    #[test]
    fn minmax_on_full_board_is_deterministic() {
        let mut player = MinMax::default();
        let game = setup("0f1e/3c2d/5a4b/6978 -");
        let first = player.place_piece(&game);
        assert_eq!(first, Cell::new(0, 0).unwrap());
        for _ in 0..8 {
            assert_eq!(player.place_piece(&game), first);
        }
    }

    #[test]
    fn hill_climber_proposes_available_pieces() {
        let mut player = HillClimber::new(StdRng::seed_from_u64(11));
        let game = setup("0123/4567/89ab/.... -");
        for _ in 0..32 {
            assert!(!game.board().is_used(player.choose_piece(&game)));
        }
    }
}
