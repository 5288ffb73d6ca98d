use log::{debug, info, trace, warn};

use super::{Board, Direction, EngineConfig, RandomSource, RngSource, Status};

/// Engine owns the board, score and status of one game.
///
/// Reads return copies; the board is mutated only by moves and spawns.
/// Commands that are not allowed in the current status are silent no-ops.
pub struct Engine {
    config: EngineConfig,
    board: Board,
    initial: Board,
    score: u64,
    status: Status,
    rng: Box<dyn RandomSource>,
}

impl Engine {
    /// Create an engine from an optional starting layout.
    ///
    /// A layout that is missing, empty, or not `size × size` falls back to
    /// an empty board. The layout is copied; the caller keeps its own data.
    /// An invalid config is replaced by the defaults.
    pub fn new(config: EngineConfig, layout: Option<&[Vec<u32>]>, rng: Box<dyn RandomSource>) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(err) => {
                warn!("invalid engine config, using defaults: {err}");
                EngineConfig::default()
            }
        };
        let initial = layout
            .and_then(Board::from_rows)
            .filter(|board| board.size() == config.size)
            .unwrap_or_else(|| Board::empty(config.size));

        Self {
            config,
            board: initial.clone(),
            initial,
            score: 0,
            status: Status::Idle,
            rng,
        }
    }

    /// Default configuration with an entropy-seeded generator
    pub fn with_defaults(layout: Option<&[Vec<u32>]>) -> Self {
        Self::new(EngineConfig::default(), layout, Box::new(RngSource::from_entropy()))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// Snapshot of the board; mutating it never affects the engine
    pub fn state(&self) -> Vec<Vec<u32>> {
        self.board.rows()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Spawn two tiles and begin play. Only valid from `Idle`.
    pub fn start(&mut self) {
        if self.status != Status::Idle {
            return;
        }

        self.spawn_random_tile();
        self.spawn_random_tile();
        self.status = Status::Playing;
        self.update_status();
    }

    /// Back to the constructed layout, zero score, `Idle`
    pub fn restart(&mut self) {
        self.board = self.initial.clone();
        self.score = 0;
        self.status = Status::Idle;
        debug!("restart: board reset to initial layout");
    }

    pub fn move_left(&mut self) -> bool {
        self.move_in(Direction::Left)
    }

    pub fn move_right(&mut self) -> bool {
        self.move_in(Direction::Right)
    }

    pub fn move_up(&mut self) -> bool {
        self.move_in(Direction::Up)
    }

    pub fn move_down(&mut self) -> bool {
        self.move_in(Direction::Down)
    }

    /// Slide and merge toward `direction`.
    ///
    /// Returns whether the board changed. Only a changed board spawns a tile
    /// and re-evaluates the status.
    pub fn move_in(&mut self, direction: Direction) -> bool {
        if !self.status.accepts_moves() {
            return false;
        }

        let before = self.board.fingerprint();

        let points = if direction.is_vertical() {
            self.board.transpose();
            let points = self.board.slide_rows(direction.is_reversed());
            self.board.transpose();
            points
        } else {
            self.board.slide_rows(direction.is_reversed())
        };

        let changed = before != self.board.fingerprint();
        if changed {
            self.score += points;
            debug!("move {}: +{} points, score {}", direction.name(), points, self.score);
            self.spawn_random_tile();
            self.update_status();
        }
        changed
    }

    /// Win beats lose; otherwise keep playing while a move exists
    fn update_status(&mut self) {
        let next = if self.board.max_tile() >= self.config.target {
            Status::Win
        } else if !self.board.has_empty_cell() && !self.board.has_adjacent_pair() {
            Status::Lose
        } else {
            Status::Playing
        };

        if next != self.status && next.is_terminal() {
            info!("game over: {:?} with score {}", next, self.score);
        }
        self.status = next;
    }

    /// Place a 2 (or, rarely, a 4) on a uniformly chosen empty cell
    fn spawn_random_tile(&mut self) {
        let empties = self.board.empty_cells();
        if empties.is_empty() {
            return;
        }

        let (row, col) = empties[self.rng.pick(empties.len())];
        let value = if self.rng.chance(self.config.four_probability) { 4 } else { 2 };
        self.board.set(row, col, value);
        trace!("spawned {} at ({}, {})", value, row, col);
    }
}
