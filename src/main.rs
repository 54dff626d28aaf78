//! Dungeon Explorer - Entry Point
//!
//! Sets up logging and configuration, then runs the console menu loop.

use std::fs::OpenOptions;
use std::io;

use anyhow::Result;

use dungeon_explorer::config::GameConfig;
use dungeon_explorer::game::Game;
use dungeon_explorer::ui::App;

fn main() -> Result<()> {
    let (config, config_error) = GameConfig::load();

    // Log to a file so log lines don't interleave with game text
    let log_target = match OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&config.log_file)
    {
        Ok(file) => env_logger::Target::Pipe(Box::new(file)),
        Err(_) => env_logger::Target::Stderr,
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    )
    .target(log_target)
    .init();

    log::info!("Starting Dungeon Explorer v{}", env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_error {
        log::warn!("{}. Using default configuration.", e);
    }

    let (mut game, seed) = Game::from_config(&config);
    log::info!("RNG seed {} (set rng_seed in the config to replay)", seed);

    let stdin = io::stdin();
    let mut app = App::new(stdin.lock(), io::stdout());
    let result = app.run(&mut game);

    if let Err(ref e) = result {
        log::error!("Game exited with error: {}", e);
    }

    log::info!("Dungeon Explorer shut down cleanly");
    result
}
