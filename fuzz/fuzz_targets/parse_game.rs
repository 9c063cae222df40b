#![no_main]
use libfuzzer_sys::fuzz_target;
use pretty_assertions::assert_eq;
use quarto_search::quarto::Game;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(game) = Game::try_from(input) else {
        return;
    };
    let printed = game.to_string();
    assert_eq!(Game::try_from(printed.as_str()).ok(), Some(game));
});
