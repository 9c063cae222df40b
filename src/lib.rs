//! Players for the board game [Quarto] and a set-cover search. For more
//! information, see [README].
//!
//! - [`quarto`]: pieces, board and the game rules.
//! - [`evaluation`]: scoring of hypothetical placements.
//! - [`search`]: hill climbing and bounded alpha-beta search.
//! - [`player`]: decision makers built on top of the searches.
//! - [`tournament`]: plays games between players and tallies the results.
//! - [`set_cover`]: best-first search over coverages.
//!
//! [Quarto]: https://en.wikipedia.org/wiki/Quarto_(board_game)
//! [README]: https://github.com/quarto-search/quarto-search/blob/main/README.md

pub mod evaluation;
pub mod player;
pub mod quarto;
pub mod search;
pub mod set_cover;
pub mod tournament;

use shadow_rs::shadow;

shadow!(build);

/// Returns the full version that can be used to identify how the binary was
/// built in the first place.
#[must_use]
pub fn version() -> String {
    format!(
        "{} (commit {}, branch {})",
        build::PKG_VERSION,
        build::SHORT_COMMIT,
        build::BRANCH
    )
}

/// Prints the version, the build type and whether the build is clean.
pub fn print_binary_info() {
    println!("quarto-search {}", version());
    println!("Release build: {}", !shadow_rs::is_debug());
    if !shadow_rs::git_clean() {
        println!("Warning: built with uncommitted changes");
    }
}
