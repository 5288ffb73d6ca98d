use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::{error, info};
use macroquad::prelude::*;
use tile_merge::{
    BestScore, Engine, EngineConfig, GameState, RandomSource, RngSource, Status,
    application::{JsonFileStore, MemoryStore, ScoreStore},
    ui, rendering, input,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Slide and merge tiles to reach the target", long_about = None)]
struct Args {
    /// JSON file overriding board size, target and spawn odds
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where the best score is kept between sessions
    #[arg(long)]
    best_score_file: Option<PathBuf>,

    /// Seed for reproducible tile spawns
    #[arg(long)]
    seed: Option<u64>,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "2048".to_owned(),
        window_width: 680,
        window_height: 500,
        window_resizable: true,
        ..Default::default()
    }
}

fn build_state(args: &Args) -> Result<GameState> {
    let config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    info!("board {}x{}, target {}", config.size, config.size, config.target);

    let rng: Box<dyn RandomSource> = match args.seed {
        Some(seed) => Box::new(RngSource::seeded(seed)),
        None => Box::new(RngSource::from_entropy()),
    };
    let store: Box<dyn ScoreStore> = match &args.best_score_file {
        Some(path) => Box::new(JsonFileStore::new(path)),
        None => Box::new(MemoryStore::default()),
    };

    Ok(GameState::new(Engine::new(config, None, rng), BestScore::new(store)))
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    let args = Args::parse();
    let mut state = match build_state(&args) {
        Ok(state) => state,
        Err(err) => {
            error!("{err:#}");
            std::process::exit(1);
        }
    };

    loop {
        let mouse_pos = mouse_position();

        // Start is only meaningful before the first move
        let buttons: Vec<_> = ui::create_buttons()
            .into_iter()
            .enumerate()
            .map(|(idx, btn)| btn.with_enabled(idx != ui::START_BUTTON || state.status() == Status::Idle))
            .collect();

        state = input::process_button_clicks(state, &buttons, mouse_pos);
        state = input::process_keyboard_input(state);

        rendering::draw_frame(&state, &buttons, mouse_pos);

        if is_key_pressed(KeyCode::Escape) {
            break;
        }
        next_frame().await;
    }
}
