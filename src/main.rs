//! Brickfall headless runner
//!
//! Plays the simulation with the autopilot and reports what happened. Useful
//! for soak-testing configs and reproducing a run from its seed.
//!
//! Usage:
//!   RUST_LOG=info cargo run -- --seed 42 --ticks 20000
//!   cargo run -- --config easy.json --snapshot

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use anyhow::{Context, Result, anyhow};
    use clap::Parser;

    use brickfall::audio::AudioMixer;
    use brickfall::autopilot::autopilot_input;
    use brickfall::{GameConfig, GameEvent, GamePhase, Session};

    #[derive(Parser)]
    #[command(name = "brickfall")]
    #[command(about = "Run a headless Brickfall game driven by the autopilot")]
    struct Args {
        /// RNG seed (defaults to the current time)
        #[arg(long)]
        seed: Option<u64>,

        /// Maximum ticks to simulate
        #[arg(long, default_value_t = 20_000)]
        ticks: u64,

        /// JSON config file; missing fields take defaults
        #[arg(long)]
        config: Option<PathBuf>,

        /// Stop after the first cleared level instead of continuing
        #[arg(long)]
        single_level: bool,

        /// Print the final snapshot as JSON
        #[arg(long)]
        snapshot: bool,
    }

    #[derive(Default)]
    struct Tally {
        paddle_hits: u32,
        bricks_destroyed: u32,
        bonus_bricks: u32,
        lives_lost: u32,
        levels_cleared: u32,
        cues: u32,
    }

    pub fn run() -> Result<()> {
        env_logger::init();
        let args = Args::parse();

        if args.ticks == 0 {
            return Err(anyhow!("--ticks must be > 0"));
        }

        let config = match &args.config {
            Some(path) => GameConfig::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => GameConfig::default(),
        };

        let seed = match args.seed {
            Some(seed) => seed,
            None => SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .context("system clock before UNIX epoch")?
                .as_millis() as u64,
        };

        let mut session = Session::new(config, seed).context("invalid game config")?;
        let mixer = AudioMixer::default();
        let mut tally = Tally::default();

        log::info!("Brickfall (headless) seed={seed}");
        session.start_game();

        let mut ticks_run = 0;
        while ticks_run < args.ticks {
            match session.phase() {
                GamePhase::Playing => {
                    let input = autopilot_input(&session);
                    let events = session.tick(&input);
                    tally.cues += mixer.cues(&events).len() as u32;
                    for event in &events {
                        record(&mut tally, event);
                    }
                    ticks_run += 1;
                }
                GamePhase::Win => {
                    if args.single_level {
                        break;
                    }
                    session.advance_level();
                }
                GamePhase::Idle | GamePhase::Paused => {
                    session.resume();
                }
                GamePhase::GameOver => break,
            }
        }

        println!();
        println!("=== RUN RESULTS ===");
        println!("  Seed:       {seed}");
        println!("  Ticks:      {ticks_run}");
        println!("  Phase:      {:?}", session.phase());
        println!("  Level:      {}", session.level());
        println!("  Score:      {}", session.score());
        println!("  Lives:      {}", session.lives());
        println!("  Paddle hits:      {}", tally.paddle_hits);
        println!(
            "  Bricks destroyed: {} ({} bonus)",
            tally.bricks_destroyed, tally.bonus_bricks
        );
        println!("  Lives lost:       {}", tally.lives_lost);
        println!("  Levels cleared:   {}", tally.levels_cleared);
        println!("  Sound cues:       {}", tally.cues);

        if args.snapshot {
            let json = serde_json::to_string_pretty(&session.snapshot())
                .context("failed to serialize snapshot")?;
            println!("{json}");
        }

        Ok(())
    }

    fn record(tally: &mut Tally, event: &GameEvent) {
        match event {
            GameEvent::PaddleHit { .. } => tally.paddle_hits += 1,
            GameEvent::BrickDestroyed { bonus, .. } => {
                tally.bricks_destroyed += 1;
                if *bonus {
                    tally.bonus_bricks += 1;
                }
            }
            GameEvent::LifeLost { lives_left } => {
                tally.lives_lost += 1;
                log::info!("Life lost, {lives_left} left");
            }
            GameEvent::LevelCleared { level, final_level } => {
                tally.levels_cleared += 1;
                log::info!("Level {level} cleared (final: {final_level})");
            }
            GameEvent::GameOver { score } => log::info!("Game over with {score} points"),
            _ => {}
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is `wasm::wasm_start` in the library
}
