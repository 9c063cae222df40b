//! Drives games between two [`Player`]s and tallies the results.

use std::fmt;

use anyhow::bail;

use crate::player::Player;
use crate::quarto::Game;

/// Number of proposals a player gets for a single decision before the game is
/// aborted. Random players propose illegal moves regularly.
pub const MAX_ATTEMPTS: usize = 1000;

/// Position of a player in the turn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Seat {
    /// Chooses the first piece.
    First,
    /// Places the first piece.
    Second,
}

impl Seat {
    /// The seat of the opponent.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => write!(f, "first"),
            Self::Second => write!(f, "second"),
        }
    }
}

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The player in this seat completed a line.
    Winner(Seat),
    /// The board was filled without a winning line.
    Draw,
}

/// Plays `game` to the end.
///
/// The player to move chooses a piece for the opponent, then the opponent
/// places it and, unless the game is over, chooses the next piece. If `game`
/// already has a selected piece, the first player places it.
///
/// # Errors
///
/// Fails if the game is already over or if a player keeps proposing illegal
/// moves for more than [`MAX_ATTEMPTS`] times in a row.
pub fn play(mut game: Game, mut players: [&mut dyn Player; 2]) -> anyhow::Result<Outcome> {
    if game.check_finished() {
        bail!("game is already over: {game}");
    }
    let mut mover = Seat::First;
    loop {
        if game.selected().is_none() {
            let player = &mut players[mover.index()];
            let mut attempts = 0;
            loop {
                let piece = player.choose_piece(&game);
                if game.select(piece) {
                    tracing::debug!(seat = %mover, %piece, "piece chosen");
                    break;
                }
                attempts += 1;
                if attempts >= MAX_ATTEMPTS {
                    bail!(
                        "{} player ({}) failed to choose an available piece after {attempts} \
                         attempts: {game}",
                        mover,
                        player.name()
                    );
                }
            }
            mover = mover.opponent();
        }
        let player = &mut players[mover.index()];
        let mut attempts = 0;
        loop {
            let cell = player.place_piece(&game);
            if game.place(cell) {
                tracing::debug!(seat = %mover, %cell, "piece placed");
                break;
            }
            attempts += 1;
            if attempts >= MAX_ATTEMPTS {
                bail!(
                    "{} player ({}) failed to find an empty cell after {attempts} attempts: {game}",
                    mover,
                    player.name()
                );
            }
        }
        if game.check_winner() {
            tracing::info!(seat = %mover, player = player.name(), "won: {game}");
            return Ok(Outcome::Winner(mover));
        }
        if game.check_finished() {
            tracing::info!("draw: {game}");
            return Ok(Outcome::Draw);
        }
    }
}

/// Results of a series of games between the same two players.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Series {
    names: [String; 2],
    wins: [u32; 2],
    draws: u32,
}

impl Series {
    /// Plays `games` games from the empty board with the same seating.
    ///
    /// # Errors
    ///
    /// Propagates the first error of [`play`].
    pub fn run(games: u32, players: [&mut dyn Player; 2]) -> anyhow::Result<Self> {
        let [first, second] = players;
        let mut series = Self {
            names: [first.name().to_owned(), second.name().to_owned()],
            ..Self::default()
        };
        for _ in 0..games {
            series.record(play(Game::new(), [&mut *first, &mut *second])?);
        }
        tracing::debug!(games, draws = series.draws, "series finished");
        Ok(series)
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(seat) => self.wins[seat.index()] += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    /// Number of games won by the player in `seat`.
    #[must_use]
    pub const fn wins(&self, seat: Seat) -> u32 {
        self.wins[seat.index()]
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn draws(&self) -> u32 {
        self.draws
    }

    /// Total number of played games.
    #[must_use]
    pub const fn games(&self) -> u32 {
        self.wins[0] + self.wins[1] + self.draws
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (first) won {}, {} (second) won {}, {} draws out of {} games",
            self.names[0],
            self.wins[0],
            self.names[1],
            self.wins[1],
            self.draws,
            self.games()
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::player::{HillClimber, MinMax, RandomPlayer};
    use crate::quarto::{Cell, Piece};

    /// Always proposes the same move.
    struct Stubborn;

    impl Player for Stubborn {
        fn name(&self) -> &str {
            "stubborn"
        }

        fn choose_piece(&mut self, _game: &Game) -> Piece {
            Piece::from_index(0).unwrap()
        }

        fn place_piece(&mut self, _game: &Game) -> Cell {
            Cell::new(0, 0).unwrap()
        }
    }

    #[test]
    fn seats() {
        assert_eq!(Seat::First.opponent(), Seat::Second);
        assert_eq!(Seat::Second.opponent().opponent(), Seat::Second);
        assert_eq!(Seat::Second.to_string(), "second");
    }

    #[test]
    fn random_games_finish() {
        let mut first = RandomPlayer::new(StdRng::seed_from_u64(1));
        let mut second = RandomPlayer::new(StdRng::seed_from_u64(2));
        for _ in 0..20 {
            assert!(play(Game::new(), [&mut first, &mut second]).is_ok());
        }
    }

    #[test]
    fn winner_completes_the_line() {
        let game = Game::from_notation("8.../9.../a.../.... -").unwrap();
        let mut first = Stubborn;
        let mut second = MinMax::default();
        // Piece 0 is hollow like the first column, the search places it there.
        assert_eq!(
            play(game, [&mut first, &mut second]).unwrap(),
            Outcome::Winner(Seat::Second)
        );
    }

    #[test]
    fn selected_piece_is_placed_by_first_player() {
        let game = Game::from_notation("8.../9.../a.../.... b").unwrap();
        let mut first = MinMax::default();
        let mut second = Stubborn;
        assert_eq!(
            play(game, [&mut first, &mut second]).unwrap(),
            Outcome::Winner(Seat::First)
        );
    }

    #[test]
    fn stubborn_player_is_an_error() {
        let mut first = Stubborn;
        let mut second = Stubborn;
        let result = play(Game::new(), [&mut first, &mut second]);
        assert!(result.is_err());
    }

    #[test]
    fn finished_game_is_an_error() {
        let game = Game::from_notation("0246/..../..../.... -").unwrap();
        let mut first = Stubborn;
        let mut second = Stubborn;
        assert!(play(game, [&mut first, &mut second]).is_err());
    }

    #[test]
    fn series_tally() {
        let mut first = HillClimber::new(StdRng::seed_from_u64(5));
        let mut second = RandomPlayer::new(StdRng::seed_from_u64(6));
        let series = Series::run(10, [&mut first, &mut second]).unwrap();
        assert_eq!(series.games(), 10);
        assert_eq!(
            series.wins(Seat::First) + series.wins(Seat::Second) + series.draws(),
            10
        );
        assert!(series.to_string().starts_with("hill-climber (first) won"));
    }
}
