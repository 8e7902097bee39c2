use anyhow::Context;
use driver::Driver;
use log::info;
use std::path::PathBuf;

mod driver;
mod game;
mod input;
mod solver;

fn main() -> anyhow::Result<()> {
    env_logger::try_init().unwrap_or(());

    let settings = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => game::data::load_settings(&path)
            .with_context(|| format!("failed to load settings from {:?}", path))?,
        None => game::Settings::default(),
    };

    let sentences = match &settings.sentences {
        Some(path) => game::data::load_sentences(path)?,
        None => {
            game::data::validate_sentences(&game::data::SENTENCES)?;
            game::data::SENTENCES.clone()
        }
    };
    info!(
        "Playing {} sentences with {} helps per round",
        sentences.len(),
        settings.max_helps
    );

    let mut game = game::Game::new(&settings);
    game.load_queue(sentences);

    // The bot doesn't know any answers, so it plays entirely off help
    let solver = solver::Solver::default();
    let mut driver = driver::direct::DirectDriver::new(game, solver)?;
    driver.play()?;

    Ok(())
}
