//! Captures the crate version and Git state at build time so that the `quarto`
//! binary can report exactly which build produced a tournament result.

fn main() -> shadow_rs::SdResult<()> {
    shadow_rs::new()
}
