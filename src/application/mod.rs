mod best_score;
mod game_state;

pub use best_score::{BestScore, JsonFileStore, MemoryStore, ScoreStore, StoreError, BEST_SCORE_KEY};
pub use game_state::GameState;
