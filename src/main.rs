//! # Burrow Main Entry Point
//!
//! Parses the command line, sets up logging, generates a dungeon and runs
//! the macroquad frame loop.

use burrow::generation::utils::create_dice;
use burrow::{
    BurrowResult, GameState, GenerationConfig, InputHandler, MacroquadDisplay, SceneManager,
};
use clap::Parser;
use log::info;
use macroquad::prelude::*;

/// Command line arguments for Burrow.
#[derive(Parser, Debug)]
#[command(name = "burrow")]
#[command(about = "A classic turn-based dungeon crawl")]
#[command(version)]
struct Args {
    /// Random seed for dungeon generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON generation config; --seed overrides its seed
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[macroquad::main("Burrow")]
async fn main() -> BurrowResult<()> {
    let args = Args::parse();
    initialize_logging(&args.log_level);

    info!("Starting Burrow v{}", burrow::VERSION);
    run_game(&args).await
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) {
    env_logger::Builder::new()
        .parse_filters(log_level)
        .format_target(false)
        .init();
}

fn load_config(args: &Args) -> BurrowResult<GenerationConfig> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading generation config from {}", path.display());
            GenerationConfig::from_json_file(path)?
        }
        None => GenerationConfig::new(clock_seed()),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    Ok(config)
}

fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}

/// Runs the main game loop with macroquad graphics.
async fn run_game(args: &Args) -> BurrowResult<()> {
    let config = load_config(args)?;
    info!("Generating dungeon with seed: {}", config.seed);

    let mut dice = create_dice(&config);
    let game_state = GameState::new_game(&config, &mut dice)?;

    let display = MacroquadDisplay::new();
    let (width, height) = display.window_size(config.map_width, config.map_height);
    request_new_screen_size(width, height);
    next_frame().await;

    let mut scenes = SceneManager::new(game_state, InputHandler::new(), display, dice);
    scenes.run().await
}
