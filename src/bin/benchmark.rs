//! Engine throughput benchmark: plays many seeded games with random moves

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use rayon::prelude::*;
use tile_merge::domain::{Direction, Engine, EngineConfig, RandomSource, RngSource, Status};

#[derive(Parser, Debug)]
#[command(author, version, about = "Measure engine moves/sec over random playouts", long_about = None)]
struct Args {
    /// Number of games to play
    #[arg(long, default_value_t = 2_000)]
    games: u64,

    /// Base seed; game i uses seed + i
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Optional JSON engine config
    #[arg(long)]
    config: Option<std::path::PathBuf>,
}

/// Wraps a source and counts how spawned values were chosen
struct CountingSource {
    inner: RngSource<rand::rngs::StdRng>,
    twos: Arc<AtomicU64>,
    fours: Arc<AtomicU64>,
}

impl RandomSource for CountingSource {
    fn pick(&mut self, n: usize) -> usize {
        self.inner.pick(n)
    }

    fn chance(&mut self, p: f64) -> bool {
        let four = self.inner.chance(p);
        let counter = if four { &self.fours } else { &self.twos };
        counter.fetch_add(1, Ordering::Relaxed);
        four
    }
}

#[derive(Default, Clone, Copy)]
struct Tally {
    moves: u64,
    wins: u64,
    losses: u64,
    best_tile: u32,
    total_score: u64,
}

impl Tally {
    fn merge(self, other: Tally) -> Tally {
        Tally {
            moves: self.moves + other.moves,
            wins: self.wins + other.wins,
            losses: self.losses + other.losses,
            best_tile: self.best_tile.max(other.best_tile),
            total_score: self.total_score + other.total_score,
        }
    }
}

fn play_one(config: EngineConfig, seed: u64, twos: Arc<AtomicU64>, fours: Arc<AtomicU64>) -> Tally {
    let source = CountingSource { inner: RngSource::seeded(seed), twos, fours };
    let mut engine = Engine::new(config, None, Box::new(source));
    let mut chooser = RngSource::seeded(seed.rotate_left(32) ^ 0x9E37_79B9_7F4A_7C15);
    engine.start();

    let directions = Direction::all();
    let mut moves = 0;
    while engine.status() == Status::Playing {
        // any direction may be a no-op; stop once none of them changes the board
        let first = chooser.pick(directions.len());
        let moved = (0..directions.len())
            .map(|offset| directions[(first + offset) % directions.len()])
            .any(|dir| engine.move_in(dir));
        if !moved {
            break;
        }
        moves += 1;
    }

    let best_tile = engine.state().iter().flatten().copied().max().unwrap_or(0);
    Tally {
        moves,
        wins: u64::from(engine.status() == Status::Win),
        losses: u64::from(engine.status() == Status::Lose),
        best_tile,
        total_score: engine.score(),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };

    println!("=== Engine Benchmark ===\n");
    println!("Games: {}  Board: {}x{}  Target: {}", args.games, config.size, config.size, config.target);

    let twos = Arc::new(AtomicU64::new(0));
    let fours = Arc::new(AtomicU64::new(0));

    let start = Instant::now();
    let tally = (0..args.games)
        .into_par_iter()
        .map(|i| play_one(config, args.seed.wrapping_add(i), Arc::clone(&twos), Arc::clone(&fours)))
        .reduce(Tally::default, Tally::merge);
    let elapsed = start.elapsed().as_secs_f64();

    let spawned_twos = twos.load(Ordering::Relaxed);
    let spawned_fours = fours.load(Ordering::Relaxed);
    let spawned = (spawned_twos + spawned_fours).max(1);

    println!("{:-<50}", "");
    println!("Moves:          {:>12}", tally.moves);
    println!("Elapsed:        {:>12.3} s", elapsed);
    println!("Throughput:     {:>12.0} moves/s", tally.moves as f64 / elapsed.max(f64::EPSILON));
    println!("Wins / Losses:  {:>6} / {}", tally.wins, tally.losses);
    println!("Mean score:     {:>12.1}", tally.total_score as f64 / args.games.max(1) as f64);
    println!("Best tile:      {:>12}", tally.best_tile);
    println!(
        "Spawned 2 / 4:  {:>5.1}% / {:.1}%",
        100.0 * spawned_twos as f64 / spawned as f64,
        100.0 * spawned_fours as f64 / spawned as f64
    );
    Ok(())
}
