//! The 4x4 board, its cells and the ten lines that can win the game.

use std::fmt;

use arrayvec::ArrayVec;

use crate::quarto::piece::{Attributes, Piece};

/// Width and height of the board.
pub const BOARD_WIDTH: u8 = 4;
/// Number of cells on the board.
pub const BOARD_SIZE: usize = (BOARD_WIDTH * BOARD_WIDTH) as usize;

/// Board coordinates: `x` is the column, `y` is the row. Both are in `[0, 3]`.
///
/// ```
/// use quarto_search::quarto::Cell;
///
/// assert!(Cell::new(3, 0).is_some());
/// assert!(Cell::new(4, 0).is_none());
/// assert_eq!(Cell::all().count(), 16);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    x: u8,
    y: u8,
}

impl Cell {
    /// Returns the cell at column `x` and row `y` or `None` if it is off the
    /// board.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Option<Self> {
        if x < BOARD_WIDTH && y < BOARD_WIDTH {
            Some(Self { x, y })
        } else {
            None
        }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Enumerates all cells with `x` in the outer loop and `y` in the inner
    /// one: `(0, 0), (0, 1), ..., (0, 3), (1, 0), ...`.
    ///
    /// The search relies on this order being stable.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..BOARD_WIDTH).flat_map(|x| (0..BOARD_WIDTH).map(move |y| Self { x, y }))
    }

    const fn offset(self) -> usize {
        (self.y * BOARD_WIDTH + self.x) as usize
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the 10 lines of 4 cells: completing any of them with pieces that
/// share an attribute wins the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Line {
    /// Horizontal line with given `y`.
    Row(u8),
    /// Vertical line with given `x`.
    Column(u8),
    /// Diagonal through `(0, 0)` and `(3, 3)`.
    MainDiagonal,
    /// Diagonal through `(3, 0)` and `(0, 3)`.
    AntiDiagonal,
}

impl Line {
    /// All lines: rows, then columns, then both diagonals.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..BOARD_WIDTH)
            .map(Self::Row)
            .chain((0..BOARD_WIDTH).map(Self::Column))
            .chain([Self::MainDiagonal, Self::AntiDiagonal])
    }

    /// Lines passing through the cell, in the order: row, column, main
    /// diagonal (if `x == y`), anti diagonal (if `x + y == 3`).
    #[must_use]
    pub fn through(cell: Cell) -> ArrayVec<Self, 4> {
        let mut lines = ArrayVec::new();
        lines.push(Self::Row(cell.y));
        lines.push(Self::Column(cell.x));
        if cell.x == cell.y {
            lines.push(Self::MainDiagonal);
        }
        if cell.x + cell.y == BOARD_WIDTH - 1 {
            lines.push(Self::AntiDiagonal);
        }
        lines
    }

    /// Cells of the line.
    #[must_use]
    pub fn cells(self) -> [Cell; BOARD_WIDTH as usize] {
        std::array::from_fn(|i| {
            let i = i as u8;
            match self {
                Self::Row(y) => Cell { x: i, y },
                Self::Column(x) => Cell { x, y: i },
                Self::MainDiagonal => Cell { x: i, y: i },
                Self::AntiDiagonal => Cell {
                    x: BOARD_WIDTH - 1 - i,
                    y: i,
                },
            }
        })
    }
}

/// 4x4 grid of cells, each either empty or holding a piece. No piece can be
/// placed twice.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Piece>; BOARD_SIZE],
    /// Bit `i` is set if the piece with index `i` is on the board.
    used: u16,
}

impl Board {
    /// Creates a board without any pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
            used: 0,
        }
    }

    /// Returns the piece occupying the cell.
    #[must_use]
    pub const fn get(&self, cell: Cell) -> Option<Piece> {
        self.cells[cell.offset()]
    }

    /// Returns `true` if the piece is already on the board.
    #[must_use]
    pub const fn is_used(&self, piece: Piece) -> bool {
        self.used & (1 << piece.index()) != 0
    }

    /// Number of pieces on the board.
    #[must_use]
    pub const fn len(&self) -> u32 {
        self.used.count_ones()
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.used == 0
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.used == u16::MAX
    }

    /// Pieces that are not on the board yet, in index order.
    pub fn available_pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        Piece::all().filter(|&piece| !self.is_used(piece))
    }

    /// Empty cells in [`Cell::all`] order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        Cell::all().filter(|&cell| self.get(cell).is_none())
    }

    /// Puts the piece on the cell. Returns `false` without changing the board
    /// if the cell is occupied or the piece is already placed elsewhere.
    #[must_use]
    pub(crate) fn put(&mut self, cell: Cell, piece: Piece) -> bool {
        if self.get(cell).is_some() || self.is_used(piece) {
            return false;
        }
        self.cells[cell.offset()] = Some(piece);
        self.used |= 1 << piece.index();
        true
    }

    /// Attributes shared by all four pieces of the line, or an empty set if
    /// the line is not complete.
    #[must_use]
    pub fn shared_attributes(&self, line: Line) -> Attributes {
        let mut pieces = line.cells().into_iter().map(|cell| self.get(cell));
        let Some(Some(first)) = pieces.next() else {
            return Attributes::empty();
        };
        let mut shared = Attributes::all();
        for piece in pieces {
            match piece {
                Some(piece) => shared &= first.agreement(piece),
                None => return Attributes::empty(),
            }
        }
        shared
    }

    /// Returns `true` if the line is complete and its pieces share at least
    /// one attribute.
    #[must_use]
    pub fn is_quarto(&self, line: Line) -> bool {
        !self.shared_attributes(line).is_empty()
    }

    /// Returns `true` if any line is a winning one.
    #[must_use]
    pub fn has_quarto(&self) -> bool {
        Line::all().any(|line| self.is_quarto(line))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for Board {
    /// Prints the board as a grid, `y = 0` on top.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..BOARD_WIDTH {
            for x in 0..BOARD_WIDTH {
                if x > 0 {
                    write!(f, " ")?;
                }
                // Both coordinates are in range.
                match self.cells[(y * BOARD_WIDTH + x) as usize] {
                    Some(piece) => write!(f, "{piece}")?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
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

    #[test]
    fn cell_order() {
        let cells: Vec<_> = Cell::all().take(5).collect();
        assert_eq!(
            cells,
            vec![cell(0, 0), cell(0, 1), cell(0, 2), cell(0, 3), cell(1, 0)]
        );
    }

    #[test]
    fn lines_through_cells() {
        assert_eq!(
            Line::through(cell(0, 0)).as_slice(),
            &[Line::Row(0), Line::Column(0), Line::MainDiagonal]
        );
        assert_eq!(
            Line::through(cell(1, 2)).as_slice(),
            &[Line::Row(2), Line::Column(1), Line::AntiDiagonal]
        );
        assert_eq!(
            Line::through(cell(1, 0)).as_slice(),
            &[Line::Row(0), Line::Column(1)]
        );
        assert_eq!(Line::all().count(), 10);
        // Every cell is covered by its own lines.
        for c in Cell::all() {
            for line in Line::through(c) {
                assert!(line.cells().contains(&c));
            }
        }
    }

    #[test]
    fn anti_diagonal_cells() {
        assert_eq!(
            Line::AntiDiagonal.cells(),
            [cell(3, 0), cell(2, 1), cell(1, 2), cell(0, 3)]
        );
    }

    #[test]
    fn put() {
        let mut board = Board::empty();
        assert!(board.put(cell(1, 1), piece(3)));
        assert!(!board.put(cell(1, 1), piece(4)));
        assert!(!board.put(cell(2, 2), piece(3)));
        assert_eq!(board.get(cell(1, 1)), Some(piece(3)));
        assert!(board.is_used(piece(3)));
        assert_eq!(board.len(), 1);
        assert_eq!(board.available_pieces().count(), 15);
        assert_eq!(board.empty_cells().count(), 15);
    }

    #[test]
    fn quarto() {
        let mut board = Board::empty();
        // Short pieces 0, 2, 4, 14 agree on the first attribute only.
        for (x, index) in [0, 2, 4, 14].into_iter().enumerate() {
            assert!(!board.has_quarto());
            assert!(board.put(cell(x as u8, 3), piece(index)));
        }
        assert!(board.is_quarto(Line::Row(3)));
        assert_eq!(board.shared_attributes(Line::Row(3)), Attributes::TALL);
        assert!(board.has_quarto());
    }

    #[test]
    fn full_line_without_quarto() {
        let mut board = Board::empty();
        // 0 and 15 disagree on every attribute.
        for (y, index) in [0, 15, 1, 2].into_iter().enumerate() {
            assert!(board.put(cell(2, y as u8), piece(index)));
        }
        assert!(!board.is_quarto(Line::Column(2)));
        assert!(!board.has_quarto());
    }
}
