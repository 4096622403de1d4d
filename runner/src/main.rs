mod game_loop;
mod input;
mod render;

use clap::Parser;
use common::config::{ConfigManager, DEFAULT_CONFIG_FILE, EngineConfig, FileContentConfigProvider};
use common::logger::{self, LogLevel};
use common::{SessionRng, SnakeGameState, SnakeSettings, log};
use tokio::io::BufReader;

use game_loop::GameLoop;

#[derive(Parser)]
#[command(name = "snake_runner")]
struct Args {
    /// YAML engine config; defaults are used when the file does not exist.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: String,

    /// Seed for food placement. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Log every tick.
    #[arg(long)]
    verbose: bool,

    /// Print a status line instead of the whole board.
    #[arg(long)]
    no_board: bool,

    /// Write the default config to `--config` if it is missing, then exit.
    #[arg(long)]
    write_default_config: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Runner".to_string())
    } else {
        None
    };
    let level = if args.verbose { LogLevel::Debug } else { LogLevel::Info };
    logger::init_logger(prefix, level);

    let mut config_manager: ConfigManager<FileContentConfigProvider, EngineConfig> =
        ConfigManager::from_yaml_file(&args.config);

    if args.write_default_config {
        if config_manager.write_default_if_missing()? {
            log!("Wrote default config to {}", args.config);
        } else {
            log!("Config {} already exists, leaving it untouched", args.config);
        }
        return Ok(());
    }

    let config = config_manager.get_config()?;
    let settings = SnakeSettings::try_from(&config)?;
    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    let state = SnakeGameState::new(settings, rng)?;
    log!(
        "Snake on a {0}x{0} board, tick every {1} ms, seed {2}",
        config.board_size,
        config.tick_interval_ms,
        state.seed()
    );
    log!("Commands: start, reset, status, quit, up/down/left/right (or w/a/s/d)");

    let game_loop = GameLoop::new(state, std::io::stdout(), !args.no_board);
    let final_state = game_loop.run(BufReader::new(tokio::io::stdin())).await?;

    log!("Bye. {}", final_state.status_message());
    Ok(())
}
