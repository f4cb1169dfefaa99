use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use rust_2048::ui::{self, Presentation};
use rust_2048::{GameConfig, Session};

/// Play 2048 in the terminal. Arrow keys move, Esc or q quits.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON config file; flags below override its values
    #[arg(long, value_name = "FILE", value_parser = clap::value_parser!(PathBuf))]
    config: Option<PathBuf>,

    /// RNG seed, for replaying a game
    #[arg(long)]
    seed: Option<u64>,

    /// Board side length
    #[arg(long)]
    size: Option<usize>,

    /// Probability that a spawned tile is a 4
    #[arg(long)]
    four_probability: Option<f64>,

    /// Only spawn a tile after moves that change the board
    #[arg(long)]
    standard_spawn: bool,
}

impl Args {
    fn game_config(&self) -> anyhow::Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => GameConfig::default(),
        };

        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(size) = self.size {
            config = config.with_size(size);
        }
        if let Some(p) = self.four_probability {
            config = config.with_four_probability(p);
        }
        if self.standard_spawn {
            config = config.with_spawn_on_noop(false);
        }

        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; keep them quiet by default so they do not tear the board.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = args.game_config()?;
    let presentation = Presentation::default();

    let mut session = Session::new(config).context("invalid game configuration")?;
    let seed = session.seed();
    let score = ui::run(&mut session, &presentation).context("terminal error")?;

    info!("finished with score {score} (seed {seed})");
    println!("Final score: {score} (seed {seed})");
    Ok(())
}
