use anyhow::Result;
use clap::Parser;
use snack_snake::game::{GameConfig, GameSession};
use snack_snake::modes::HumanMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "snack_snake")]
#[command(version, about = "Grid-based snake game in the terminal")]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Coordinate of the far border (cells span 0..=GRID_SIZE)
    #[arg(long)]
    grid_size: Option<i32>,

    /// Milliseconds between ticks
    #[arg(long)]
    tick_rate_ms: Option<u64>,

    /// Seed for snack and start positions
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };
        if let Some(grid_size) = self.grid_size {
            config.grid_size = grid_size;
        }
        if let Some(tick_rate_ms) = self.tick_rate_ms {
            config.tick_rate_ms = tick_rate_ms;
        }
        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.game_config()?;

    let session = match cli.seed {
        Some(seed) => GameSession::with_seed(config, seed),
        None => GameSession::new(config),
    };

    let mut human_mode = HumanMode::from_session(session);
    human_mode.run().await?;

    Ok(())
}
