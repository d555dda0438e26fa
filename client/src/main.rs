mod app;
mod commands;
mod config;
mod ui;

use std::time::Duration;

use clap::Parser;
use common::config::ConfigManager;
use common::{GameController, SessionRng, log, logger};

#[derive(Parser)]
#[command(name = "tic_tac_toe_client")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// Config file path; defaults to a YAML file next to the executable.
    #[arg(long)]
    config: Option<String>,

    /// Fixed RNG seed for reproducible computer moves.
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = args.use_log_prefix.then(|| "Client".to_string());
    logger::init_logger(prefix);

    let manager = match &args.config {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => config::get_config_manager(),
    };
    let cfg: config::Config = manager.get_config()?;

    let rng = match args.seed.or(cfg.seed) {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    log!(
        "Starting with seed {} and a {}ms computer move delay",
        rng.seed(),
        cfg.bot_move_delay_ms
    );

    let controller = GameController::new(rng);
    app::run(controller, Duration::from_millis(cfg.bot_move_delay_ms)).await;

    Ok(())
}
