mod config;
mod offline;

use clap::Parser;
use snake_common::{log, logger};

use config::get_config_manager;
use offline::run_snake_game;

#[derive(Parser)]
#[command(name = "snake_runner")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// YAML config file; defaults apply when it does not exist.
    #[arg(long)]
    config: Option<String>,

    /// Let a bot play instead of reading keys from stdin.
    #[arg(long)]
    autopilot: bool,

    /// Seed for food placement; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

// One thread: ticks and input are handled strictly one after another.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Snake".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let mut config = get_config_manager(args.config.as_deref())
        .get_config()
        .inspect_err(|e| log!("Failed to load config: {}", e))?;
    if args.autopilot {
        config.autopilot.enabled = true;
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    log!(
        "Starting snake on {}x{} field, seed {}",
        config.game.field_width,
        config.game.field_height,
        seed
    );

    let high_score = run_snake_game(&config, seed).await?;
    log!("Best score this session: {}", high_score);

    Ok(())
}
