// Domain layer - Game rules engine
pub mod domain;

// Application layer - Session coordination and best score
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Direction, Engine, EngineConfig, RandomSource, RngSource, Status};
pub use application::{BestScore, GameState};
pub use ui::Button;
