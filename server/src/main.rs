mod command;
mod line_server;
mod message_handler;
mod server_config;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use common::config::{ConfigManager, FileContentConfigProvider, Validate};
use common::games::SessionStore;
use common::{log, logger};
use tokio::net::TcpListener;

use line_server::run_line_server;
use message_handler::MessageHandler;
use server_config::ServerConfig;

#[derive(Parser)]
#[command(name = "channel_games_server")]
struct Args {
    #[arg(long, default_value = "channel_games.yaml")]
    config: PathBuf,

    #[arg(long)]
    listen: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager: ConfigManager<FileContentConfigProvider, ServerConfig> =
        ConfigManager::from_yaml_file(args.config.clone());
    let mut config = config_manager.get_config()?;
    if let Some(listen) = args.listen {
        config.listen_addr = listen;
        config.validate()?;
    }

    let prefix = match config.log_prefix.clone() {
        Some(prefix) => Some(prefix),
        None if args.use_log_prefix => Some("Server".to_string()),
        None => None,
    };
    logger::init_logger(prefix, args.verbose || config.verbose);

    let listener = TcpListener::bind(&config.listen_addr).await?;
    let handler = Arc::new(MessageHandler::new(
        SessionStore::new(config.engine.clone()),
        config.command_prefix.clone(),
    ));

    log!(
        "Channel games server listening on {} (config: {})",
        config.listen_addr,
        args.config.display()
    );

    tokio::select! {
        result = run_line_server(listener, handler) => result?,
        signal = tokio::signal::ctrl_c() => {
            signal?;
            log!("Shutdown signal received");
        }
    }

    log!("Server shut down gracefully");

    Ok(())
}
