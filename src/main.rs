use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use env_logger::{Builder, Env, Target};
use std::fs::File;
use std::path::{Path, PathBuf};
use steer_snake::game::{GameConfig, GameEngine};
use steer_snake::modes::{HeadlessMode, HumanMode, Steer};

#[derive(Parser)]
#[command(name = "steer_snake")]
#[command(version, about = "Snake with continuous motion and rotation-based steering")]
struct Cli {
    /// Game mode
    #[arg(long, default_value = "human")]
    mode: Mode,

    /// JSON file overriding the default tuning values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for fruit placement
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (the terminal belongs to the game)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Frames to simulate in headless mode
    #[arg(long, default_value = "600")]
    frames: u64,

    /// Steering held during a headless run
    #[arg(long, default_value = "none")]
    steer: SteerArg,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play with the keyboard
    Human,
    /// Simulate without a terminal and print a summary
    Headless,
}

#[derive(Clone, ValueEnum)]
enum SteerArg {
    None,
    Left,
    Right,
}

impl From<SteerArg> for Steer {
    fn from(arg: SteerArg) -> Self {
        match arg {
            SteerArg::None => Steer::Straight,
            SteerArg::Left => Steer::Left,
            SteerArg::Right => Steer::Right,
        }
    }
}

fn init_logging(log_file: Option<&Path>, to_stderr: bool) -> Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {:?}", path))?;
            builder.target(Target::Pipe(Box::new(file)));
        }
        None if to_stderr => {
            builder.target(Target::Stderr);
        }
        // Logging to the terminal would corrupt the game screen
        None => return Ok(()),
    }

    builder.try_init().context("Failed to initialise logging")
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let headless = matches!(cli.mode, Mode::Headless);
    init_logging(cli.log_file.as_deref(), headless)?;

    let config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    log::info!("starting with {:?}", config);

    let engine = match cli.seed {
        Some(seed) => GameEngine::seeded(config, seed),
        None => GameEngine::new(config),
    };

    // Dispatch to appropriate mode
    match cli.mode {
        Mode::Human => {
            let mut human_mode = HumanMode::new(engine);
            human_mode.run().await?;
        }
        Mode::Headless => {
            let mut headless_mode = HeadlessMode::new(engine, cli.frames, cli.steer.into());
            headless_mode.run();
        }
    }

    Ok(())
}
