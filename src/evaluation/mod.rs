//! "Static" evaluation of a single hypothetical placement: how close the lines
//! through the target cell get to a Quarto after the piece lands there.
//!
//! The evaluator looks at up to four lines (row, column and the diagonals the
//! cell is on) and, for every attribute, counts the pieces in the line that
//! agree with the placed piece. A line containing a piece that disagrees on
//! every attribute the others share is dead and contributes nothing.
//!
//! Both local-search selectors in [`crate::search::local`] are built on top of
//! [`evaluate_placement`].

pub mod score;

pub use score::Score;

use crate::quarto::{Attributes, Board, Cell, Game, Line, Piece};

/// Result of [`evaluate_placement`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Number of aligned pieces in the best line through the cell, in
    /// `[0, 4]`. 4 means the placement wins, 3 means the best line is one
    /// piece away from a Quarto and 0 means the placement is illegal or every
    /// line through the cell is dead.
    pub score: u8,
    /// Attributes shared by the three aligned pieces when `score` is
    /// [`Self::ALMOST_QUARTO`]. Empty otherwise.
    pub shared: Attributes,
}

impl Placement {
    /// Score of a placement that completes a winning line.
    pub const QUARTO: u8 = 4;
    /// Score of a line with three aligned pieces and one empty cell.
    pub const ALMOST_QUARTO: u8 = 3;

    /// Placement that is not possible or not worth anything.
    pub const NONE: Self = Self {
        score: 0,
        shared: Attributes::empty(),
    };

    const WINNING: Self = Self {
        score: Self::QUARTO,
        shared: Attributes::empty(),
    };

    /// Returns `true` if the placement wins the game.
    #[must_use]
    pub const fn is_quarto(self) -> bool {
        self.score == Self::QUARTO
    }
}

/// Scores placing a piece on the cell without changing `game`.
///
/// If `piece` is given, it is selected first (replacing the selection in
/// `game`), otherwise the already selected piece is used. A failed selection
/// or placement (the piece is on the board already, nothing is selected, the
/// cell is occupied) yields [`Placement::NONE`].
///
/// ```
/// use quarto_search::evaluation::{evaluate_placement, Placement};
/// use quarto_search::quarto::{Cell, Game, Piece};
///
/// // Three square pieces in the first column: the fourth one wins.
/// let game = Game::from_notation("8.../9.../a.../.... -").unwrap();
/// let corner = Cell::new(0, 3).unwrap();
/// let square = Piece::from_index(0b1111).unwrap();
/// let round = Piece::from_index(0b0100).unwrap();
/// assert!(evaluate_placement(&game, corner, Some(square)).is_quarto());
/// // A round piece kills the column, only the empty row and diagonal remain.
/// assert_eq!(evaluate_placement(&game, corner, Some(round)).score, 1);
/// ```
#[must_use]
pub fn evaluate_placement(game: &Game, cell: Cell, piece: Option<Piece>) -> Placement {
    let mut next = *game;
    if let Some(piece) = piece {
        if !next.select(piece) {
            return Placement::NONE;
        }
    }
    let Some(placed) = next.selected() else {
        return Placement::NONE;
    };
    if !next.place(cell) {
        return Placement::NONE;
    }
    if next.check_winner() {
        return Placement::WINNING;
    }
    let mut best = Placement::NONE;
    for line in Line::through(cell) {
        let candidate = evaluate_line(next.board(), line, cell, placed);
        if candidate.is_quarto() {
            return Placement::WINNING;
        }
        // On a tie at three aligned pieces the latest line's attributes win.
        if candidate.score > best.score
            || (candidate.score == Placement::ALMOST_QUARTO && best.score == candidate.score)
        {
            best = candidate;
        }
    }
    best
}

/// Scores a single line after `placed` landed on `cell`.
fn evaluate_line(board: &Board, line: Line, cell: Cell, placed: Piece) -> Placement {
    // The placed piece trivially agrees with itself.
    let mut occupied = 1;
    let mut matches = [1u8; 4];
    for other in line.cells() {
        if other == cell {
            continue;
        }
        let Some(piece) = board.get(other) else {
            continue;
        };
        occupied += 1;
        let agreement = placed.agreement(piece);
        for (count, attribute) in matches.iter_mut().zip(Attributes::all().iter()) {
            if agreement.contains(attribute) {
                *count += 1;
            }
        }
    }
    let aligned = matches.iter().fold(0, |best, &count| best.max(count));
    // A piece that breaks the alignment kills the line.
    if aligned < occupied {
        return Placement::NONE;
    }
    let shared = if aligned == Placement::ALMOST_QUARTO {
        Attributes::all()
            .iter()
            .zip(matches)
            .filter(|&(_, count)| count == aligned)
            .fold(Attributes::empty(), |shared, (attribute, _)| {
                shared | attribute
            })
    } else {
        Attributes::empty()
    };
    Placement {
        score: aligned,
        shared,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn cell(x: u8, y: u8) -> Cell {
        Cell::new(x, y).expect("coordinates are on the board")
    }

    fn piece(index: u8) -> Piece {
        Piece::from_index(index).expect("valid piece index")
    }

    fn setup(notation: &str) -> Game {
        Game::from_notation(notation).expect("parsing valid game: {notation}")
    }

    #[test]
    fn lonely_piece() {
        let game = Game::new();
        for piece in Piece::all() {
            for cell in Cell::all() {
                assert_eq!(
                    evaluate_placement(&game, cell, Some(piece)),
                    Placement {
                        score: 1,
                        shared: Attributes::empty()
                    }
                );
            }
        }
    }

    #[test]
    fn illegal_placements() {
        let game = setup("0.../..../..../.... -");
        // Nothing is selected.
        assert_eq!(evaluate_placement(&game, cell(1, 1), None), Placement::NONE);
        // The piece is on the board already.
        assert_eq!(
            evaluate_placement(&game, cell(1, 1), Some(piece(0))),
            Placement::NONE
        );
        // The cell is occupied.
        assert_eq!(
            evaluate_placement(&game, cell(0, 0), Some(piece(1))),
            Placement::NONE
        );
    }

    #[test]
    fn does_not_change_game() {
        let game = setup("0.../..../..../.... 5");
        let before = game;
        let _ = evaluate_placement(&game, cell(3, 3), None);
        let _ = evaluate_placement(&game, cell(2, 3), Some(piece(7)));
        assert_eq!(game, before);
    }

    #[test]
    fn aligned_pieces() {
        // 0b0001 and 0b0011 agree on everything but the second attribute.
        let game = setup("13../..../..../.... -");
        assert_eq!(
            evaluate_placement(&game, cell(2, 0), Some(piece(0b0101))),
            Placement {
                score: 3,
                shared: Attributes::TALL | Attributes::SQUARE,
            }
        );
        assert_eq!(
            evaluate_placement(&game, cell(2, 1), Some(piece(0b0101))).score,
            1
        );
    }

    #[test]
    fn dead_line() {
        // 0b0000 and 0b1111 have nothing in common, so the row is dead for
        // any third piece.
        let game = setup("0f../..../..../.... -");
        let target = cell(3, 0);
        for candidate in game.available_pieces() {
            let mut next = game;
            assert!(next.select(candidate));
            assert!(next.place(target));
            assert_eq!(
                evaluate_line(next.board(), Line::Row(0), target, candidate),
                Placement::NONE
            );
            // The column and the anti diagonal are still empty.
            assert_eq!(evaluate_placement(&game, target, Some(candidate)).score, 1);
        }
    }

    #[test]
    fn two_aligned() {
        let game = setup("..../.8../..../.... -");
        // Row 2 and column 2 are empty, but the main diagonal holds 0b1000.
        assert_eq!(
            evaluate_placement(&game, cell(2, 2), Some(piece(0b1001))).score,
            2
        );
    }

    #[test]
    fn winning_diagonal() {
        let mut game = setup("1.../.3../..5./.... 7");
        assert!(evaluate_placement(&game, cell(3, 3), None).is_quarto());
        assert!(game.place(cell(3, 3)));
        assert!(game.check_finished());
    }

    #[test]
    fn latest_almost_quarto_line_wins_tie() {
        // Row 0 aligns on short and round pieces with 0b0010 and 0b0100,
        // column 0 aligns on neutral and hollow ones with 0b1000 and 0b0001.
        let game = setup(".24./8.../1.../.... -");
        assert_eq!(
            evaluate_placement(&game, cell(0, 0), Some(piece(0))),
            Placement {
                score: 3,
                shared: Attributes::COLORED | Attributes::SOLID,
            }
        );
    }
}
