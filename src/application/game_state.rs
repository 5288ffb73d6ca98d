use log::info;

use crate::domain::{Direction, Engine, Status};
use super::BestScore;

/// GameState orchestrates one play session for the front end.
/// This is the application layer that coordinates the engine and the
/// best-score tracker; it owns no game rules of its own.
pub struct GameState {
    pub engine: Engine,
    pub best: BestScore,
    /// Number of moves that changed the board since the last restart
    pub moves: u64,
    /// Whether the most recent move changed the board
    pub last_move_changed: bool,
}

impl GameState {
    pub fn new(engine: Engine, best: BestScore) -> Self {
        Self {
            engine,
            best,
            moves: 0,
            last_move_changed: false,
        }
    }

    pub fn status(&self) -> Status {
        self.engine.status()
    }

    pub fn score(&self) -> u64 {
        self.engine.score()
    }

    pub fn best_score(&self) -> u64 {
        self.best.best()
    }

    /// Begin play if the game has not started yet
    pub fn start(mut self) -> Self {
        if self.engine.status() == Status::Idle {
            self.engine.start();
            info!("game started");
        }
        self
    }

    /// Discard progress and return to the initial layout
    pub fn restart(mut self) -> Self {
        self.engine.restart();
        self.moves = 0;
        self.last_move_changed = false;
        self
    }

    /// Forward a move to the engine while the game is running.
    /// Every changed move offers the new score to the best-score tracker.
    pub fn apply(mut self, direction: Direction) -> Self {
        if !self.engine.status().accepts_moves() {
            self.last_move_changed = false;
            return self;
        }

        self.last_move_changed = self.engine.move_in(direction);
        if self.last_move_changed {
            self.moves += 1;
            if self.best.observe(self.engine.score()) {
                info!("new best score {}", self.best.best());
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::MemoryStore;
    use crate::domain::{EngineConfig, ScriptedSource};

    fn session(layout: &[Vec<u32>]) -> GameState {
        let engine = Engine::new(EngineConfig::default(), Some(layout), Box::new(ScriptedSource::new()));
        GameState::new(engine, BestScore::new(Box::new(MemoryStore::default())))
    }

    #[test]
    fn test_moves_ignored_until_started() {
        let state = session(&[vec![2, 2, 0, 0], vec![0; 4], vec![0; 4], vec![0; 4]])
            .apply(Direction::Left);
        assert!(!state.last_move_changed);
        assert_eq!(state.moves, 0);
        assert_eq!(state.status(), Status::Idle);
    }

    #[test]
    fn test_merge_updates_best_score() {
        let state = session(&[vec![2, 2, 0, 0], vec![0; 4], vec![0; 4], vec![0; 4]])
            .start()
            .apply(Direction::Left);
        assert!(state.last_move_changed);
        assert_eq!(state.moves, 1);
        assert!(state.score() >= 4);
        assert_eq!(state.best_score(), state.score());
    }

    #[test]
    fn test_restart_keeps_best_score() {
        let state = session(&[vec![2, 2, 0, 0], vec![0; 4], vec![0; 4], vec![0; 4]])
            .start()
            .apply(Direction::Left)
            .restart();
        assert_eq!(state.score(), 0);
        assert_eq!(state.moves, 0);
        assert_eq!(state.status(), Status::Idle);
        assert!(state.best_score() >= 4);
    }
}
