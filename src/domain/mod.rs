mod board;
mod config;
mod direction;
mod engine;
mod random;
mod status;

pub use board::{Board, slide_and_merge};
pub use config::{ConfigError, EngineConfig, DEFAULT_FOUR_PROBABILITY, DEFAULT_SIZE, DEFAULT_TARGET};
pub use direction::Direction;
pub use engine::Engine;
pub use random::{RandomSource, RngSource, ScriptedSource};
pub use status::Status;
