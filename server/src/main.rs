mod messages;
mod server_config;
mod session;
mod web_server;

use std::path::PathBuf;

use clap::Parser;
use common::config::ConfigManager;
use common::{log, logger};

use server_config::ServerConfig;
use session::MatchSession;
use web_server::run_web_server;

#[derive(Parser)]
#[command(name = "tictactoe_server")]
struct Args {
    #[arg(long, default_value = "tictactoe_server_config.yaml")]
    config: String,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Server".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager: ConfigManager<_, ServerConfig> =
        ConfigManager::from_yaml_file(&args.config);
    let config = config_manager.get_config()?;

    let session = MatchSession::new();
    session.reset(config.first_player).await;

    log!(
        "Match session ready, first player mode: {:?}",
        config.first_player
    );

    run_web_server(
        session,
        config.bind_address,
        PathBuf::from(config.static_files_path),
    )
    .await;

    Ok(())
}
