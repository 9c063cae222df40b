//! [Search] looks ahead into possible continuations of a game and picks the
//! piece to hand over or the cell to place a piece on.
//!
//! Two families of algorithms are implemented:
//!
//! - [`local`]: [hill climbing] over candidate pieces and cells, scored with
//!   [`crate::evaluation::evaluate_placement`]. Cheap and randomized.
//! - [`minimax`]: depth- and breadth-bounded [Minimax] with [Alpha-Beta
//!   pruning] over alternating "choose" and "place" plies.
//!
//! [Search]: https://en.wikipedia.org/wiki/Game_tree
//! [hill climbing]: https://en.wikipedia.org/wiki/Hill_climbing
//! [Minimax]: https://en.wikipedia.org/wiki/Minimax
//! [Alpha-Beta pruning]: https://en.wikipedia.org/wiki/Alpha%E2%80%93beta_pruning

pub mod local;
pub mod minimax;

/// Search depth in plies. Choosing a piece and placing it are separate plies.
pub type Depth = u8;

/// Structural bounds of [`minimax`] search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    /// Deepest ply that is still explored. Calls below it return a neutral
    /// value right away.
    pub depth: Depth,
    /// Maximum number of legal siblings explored in a single ply.
    pub breadth: u8,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            depth: 4,
            breadth: 4,
        }
    }
}
