//! Game state shared by the players: the board and the piece waiting to be
//! placed.

use std::fmt;

use anyhow::{bail, Context};
use itertools::Itertools;

use crate::quarto::board::{Board, Cell, BOARD_WIDTH};
use crate::quarto::piece::Piece;

/// Snapshot of a Quarto game: pieces on the board and the piece selected for
/// the player to move.
///
/// A turn consists of the opponent [selecting](Self::select) a piece and the
/// current player [placing](Self::place) it. Both mutators report failure
/// instead of panicking, so that callers can retry with a different choice.
///
/// The whole state is a few bytes and implements [`Copy`]: speculative search
/// works on its own copies and never touches the caller's state.
///
/// ## Notation
///
/// The game is (de)serialized as four ranks (`y = 0` first) separated by `/`,
/// each with four cells: `.` for an empty cell or the hexadecimal index of the
/// piece. The board is followed by a space and the selected piece or `-`:
///
/// ```
/// use quarto_search::quarto::Game;
///
/// let game = Game::from_notation("0.../.1../..2./...3 f").unwrap();
/// assert_eq!(game.board().len(), 4);
/// assert_eq!(game.selected().map(|piece| piece.index()), Some(15));
/// assert_eq!(game.to_string(), "0.../.1../..2./...3 f");
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Game {
    board: Board,
    selected: Option<Piece>,
}

impl Game {
    /// Creates a game with an empty board and no selected piece.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            board: Board::empty(),
            selected: None,
        }
    }

    /// Parses the game notation, see [`Game`].
    ///
    /// # Errors
    ///
    /// Returns an error if the board does not have four ranks of four cells,
    /// contains unexpected symbols, holds the same piece twice or the selected
    /// piece is already on the board.
    pub fn from_notation(input: &str) -> anyhow::Result<Self> {
        let input = input.trim();
        let (ranks, selected) = match input.split_once(' ') {
            Some((ranks, selected)) => (ranks, Some(selected.trim())),
            None => (input, None),
        };
        let ranks: Vec<&str> = ranks.split('/').collect();
        if ranks.len() != usize::from(BOARD_WIDTH) {
            bail!("expected {BOARD_WIDTH} ranks, got {}", ranks.len());
        }
        let mut board = Board::empty();
        for (y, rank) in ranks.iter().enumerate() {
            let symbols: Vec<char> = rank.chars().collect();
            if symbols.len() != usize::from(BOARD_WIDTH) {
                bail!(
                    "expected {BOARD_WIDTH} cells in rank {y}, got {}: '{rank}'",
                    symbols.len()
                );
            }
            for (x, &symbol) in symbols.iter().enumerate() {
                if symbol == '.' {
                    continue;
                }
                let piece = Piece::try_from(symbol)
                    .with_context(|| format!("unexpected symbol in rank {y}"))?;
                let cell = Cell::new(x as u8, y as u8).context("cell is off the board")?;
                if !board.put(cell, piece) {
                    bail!("piece {piece} is placed more than once");
                }
            }
        }
        let selected = match selected {
            None | Some("-") => None,
            Some(symbol) => {
                let mut chars = symbol.chars();
                let (Some(symbol), None) = (chars.next(), chars.next()) else {
                    bail!("selected piece should be a single symbol, got '{symbol}'");
                };
                let piece = Piece::try_from(symbol).context("malformed selected piece")?;
                if board.is_used(piece) {
                    bail!("selected piece {piece} is already on the board");
                }
                Some(piece)
            },
        };
        Ok(Self { board, selected })
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// The piece the player to move has to place, if it was already chosen.
    #[must_use]
    pub const fn selected(&self) -> Option<Piece> {
        self.selected
    }

    /// Selects the piece the next player has to place. Returns `false` if the
    /// piece is already on the board. Selecting again replaces the previous
    /// choice.
    #[must_use]
    pub fn select(&mut self, piece: Piece) -> bool {
        if self.board.is_used(piece) {
            return false;
        }
        self.selected = Some(piece);
        true
    }

    /// Places the selected piece on the cell. Returns `false` if no piece is
    /// selected or the cell is occupied.
    #[must_use]
    pub fn place(&mut self, cell: Cell) -> bool {
        let Some(piece) = self.selected else {
            return false;
        };
        if !self.board.put(cell, piece) {
            return false;
        }
        self.selected = None;
        true
    }

    /// Returns `true` if any line on the board is complete and its pieces share
    /// an attribute.
    #[must_use]
    pub fn check_winner(&self) -> bool {
        self.board.has_quarto()
    }

    /// Returns `true` if the game is over: the last placement won or the board
    /// is full.
    #[must_use]
    pub fn check_finished(&self) -> bool {
        self.board.is_full() || self.check_winner()
    }

    /// Pieces that can still be selected, in index order.
    pub fn available_pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.board.available_pieces()
    }
}

impl TryFrom<&str> for Game {
    type Error = anyhow::Error;

    fn try_from(input: &str) -> anyhow::Result<Self> {
        Self::from_notation(input)
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ranks = (0..BOARD_WIDTH)
            .map(|y| {
                (0..BOARD_WIDTH)
                    .filter_map(|x| Cell::new(x, y))
                    .map(|cell| match self.board.get(cell) {
                        Some(piece) => piece.to_string(),
                        None => ".".to_string(),
                    })
                    .join("")
            })
            .join("/");
        match self.selected {
            Some(piece) => write!(f, "{ranks} {piece}"),
            None => write!(f, "{ranks} -"),
        }
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.board)?;
        match self.selected {
            Some(piece) => writeln!(f, "Selected: {piece}"),
            None => writeln!(f, "Selected: -"),
        }
    }
}
