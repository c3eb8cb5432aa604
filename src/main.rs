use anyhow::Result;
use clap::Parser;
use food_snake::game::{GameConfig, GameStatus};
use food_snake::logging::{self, LogSettings};
use food_snake::modes::HumanMode;
use log::info;

/// Logging is configured with the SNAKE_LOG (file path) and SNAKE_LOG_LEVEL
/// environment variables.
#[derive(Parser)]
#[command(name = "food_snake")]
#[command(version, about = "Snake where every kind of food does something different")]
struct Cli {}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    Cli::parse();
    logging::init(&LogSettings::from_env())?;

    let mut game = HumanMode::open(GameConfig::default())?;
    game.run().await?;

    let state = game.state();
    let ending = match state.status {
        GameStatus::GameOver(cause) => format!("Game over ({:?})", cause),
        GameStatus::Running => "Quit".to_string(),
    };
    println!("{ending}. Final score: {}", state.score);
    info!("shutting down");

    Ok(())
}
