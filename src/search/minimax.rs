//! Implementation of [Minimax] algorithm with [Alpha-Beta pruning] for the two
//! kinds of Quarto plies.
//!
//! A Quarto turn is split into two plies: the player to move places the piece
//! it was given and then chooses the piece the opponent has to place. The
//! search alternates between [`Search::choose`] and [`Search::place`]
//! accordingly: choosing hands the next ply to the opponent, while placing
//! keeps it, because the same player chooses right after placing.
//!
//! The search is bounded structurally rather than by time:
//!
//! - plies deeper than [`Limits::depth`] are not explored and count as
//!   neutral ([`Score::DRAW`]);
//! - at most [`Limits::breadth`] legal siblings are explored per ply, in a
//!   fixed order (pieces by index, cells by [`Cell::all`]).
//!
//! Because of the breadth cap the result depends on the enumeration order and
//! is not the exact minimax value: it trades completeness for speed.
//!
//! [Minimax]: https://en.wikipedia.org/wiki/Minimax
//! [Alpha-Beta pruning]: https://en.wikipedia.org/wiki/Alpha%E2%80%93beta_pruning

use crate::evaluation::Score;
use crate::quarto::{Cell, Game, Piece};
use crate::search::{Depth, Limits};

/// Counters describing the shape of the explored tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Number of plies that were explored (not cut off by depth).
    pub nodes: u64,
    /// Deepest explored ply.
    pub deepest: Depth,
    /// Largest number of legal siblings explored within one ply.
    pub widest: u8,
}

/// Depth- and breadth-bounded alpha-beta search.
#[derive(Debug)]
pub struct Search {
    limits: Limits,
    stats: Stats,
}

impl Search {
    /// Creates a search with given structural limits.
    #[must_use]
    pub fn new(limits: Limits) -> Self {
        Self {
            limits,
            stats: Stats::default(),
        }
    }

    /// Statistics of the last top-level search.
    #[must_use]
    pub const fn stats(&self) -> Stats {
        self.stats
    }

    /// Finds the piece to hand over to the opponent. Returns `None` if no
    /// piece can be selected.
    pub fn choose_piece(&mut self, game: &Game) -> (Option<Piece>, Score) {
        self.stats = Stats::default();
        let result = self.choose(game, 0, true, -Score::INFINITY, Score::INFINITY);
        tracing::trace!(
            nodes = self.stats.nodes,
            deepest = self.stats.deepest,
            widest = self.stats.widest,
            score = %result.1,
            "piece search finished"
        );
        result
    }

    /// Finds the cell to place the selected piece on. Returns `None` if no
    /// piece is selected or the board is full.
    pub fn place_piece(&mut self, game: &Game) -> (Option<Cell>, Score) {
        self.stats = Stats::default();
        let result = self.place(game, 0, true, -Score::INFINITY, Score::INFINITY);
        tracing::trace!(
            nodes = self.stats.nodes,
            deepest = self.stats.deepest,
            widest = self.stats.widest,
            score = %result.1,
            "placement search finished"
        );
        result
    }

    fn visit(&mut self, depth: Depth) {
        self.stats.nodes += 1;
        self.stats.deepest = self.stats.deepest.max(depth);
    }

    fn explore(&mut self, siblings: u8) {
        self.stats.widest = self.stats.widest.max(siblings);
    }

    /// The player to move (maximizing or not) chooses a piece for the
    /// opponent.
    fn choose(
        &mut self,
        game: &Game,
        depth: Depth,
        maximizing: bool,
        mut alpha: Score,
        mut beta: Score,
    ) -> (Option<Piece>, Score) {
        if depth > self.limits.depth {
            return (None, Score::DRAW);
        }
        self.visit(depth);
        let mut best_piece = None;
        let mut best_score = if maximizing {
            -Score::INFINITY
        } else {
            Score::INFINITY
        };
        let mut siblings = 0;
        for piece in Piece::all() {
            let mut next = *game;
            if !next.select(piece) {
                continue;
            }
            siblings += 1;
            self.explore(siblings);
            let (_, score) = self.place(&next, depth + 1, !maximizing, alpha, beta);
            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_piece = Some(piece);
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_piece = Some(piece);
                }
                beta = beta.min(best_score);
            }
            if beta <= alpha || siblings >= self.limits.breadth {
                break;
            }
        }
        match best_piece {
            Some(_) => (best_piece, best_score),
            None => (None, Score::DRAW),
        }
    }

    /// The player to move (maximizing or not) places the selected piece.
    fn place(
        &mut self,
        game: &Game,
        depth: Depth,
        maximizing: bool,
        mut alpha: Score,
        mut beta: Score,
    ) -> (Option<Cell>, Score) {
        if depth > self.limits.depth {
            return (None, Score::DRAW);
        }
        self.visit(depth);
        let mut best_cell = None;
        let mut best_score = if maximizing {
            -Score::INFINITY
        } else {
            Score::INFINITY
        };
        let mut siblings = 0;
        for cell in Cell::all() {
            let mut next = *game;
            if !next.place(cell) {
                continue;
            }
            siblings += 1;
            self.explore(siblings);
            if next.check_winner() {
                let score = if maximizing { Score::WIN } else { Score::LOSS };
                return (Some(cell), score);
            }
            // The player who placed the piece also chooses the next one.
            let (_, score) = self.choose(&next, depth + 1, maximizing, alpha, beta);
            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_cell = Some(cell);
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_cell = Some(cell);
                }
                beta = beta.min(best_score);
            }
            if beta <= alpha || siblings >= self.limits.breadth {
                break;
            }
        }
        match best_cell {
            Some(_) => (best_cell, best_score),
            None => (None, Score::DRAW),
        }
    }
}

impl Default for Search {
    fn default() -> Self {
        Self::new(Limits::default())
    }
}
