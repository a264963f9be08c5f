//! MCEngine console host - Main entry point
//!
//! 프로세스 내 `ServerHost`를 띄우고 Economy API 예제 확장을 로드한 뒤
//! stdin 콘솔로 명령어 레지스트리를 구동합니다.

mod cli;

use clap::Parser;
use mcengine_core::{EventType, ExtensionManager, ServerEvent, ServerHost};
use mcengine_economy_api_example::ExampleEconomyApi;
use mcengine_foundation::HostConfig;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// MCEngine - extension host console
#[derive(Parser, Debug)]
#[command(name = "mcengine")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the host config file (default: ./mcengine/mcengine.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level / filter (overrides config)
    #[arg(long)]
    log_level: Option<String>,

    /// Host name, used as the command namespace (overrides config)
    #[arg(long)]
    name: Option<String>,

    /// Do not expose the command registry to late-loaded extensions
    #[arg(long)]
    sealed: bool,

    /// Run a console line and exit (repeatable)
    #[arg(short, long)]
    exec: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load config
    let mut config = match &args.config {
        Some(path) => HostConfig::load_from(path)?,
        None => HostConfig::load()?,
    };
    if let Some(level) = args.log_level {
        config.log_level = level;
    }
    if let Some(name) = args.name {
        config.name = name;
    }
    if args.sealed {
        config.expose_command_registry = false;
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    info!("Starting {} (namespace: {})", config.name, config.namespace());

    let host = Arc::new(ServerHost::new(config));
    let manager = ExtensionManager::new(host.clone());

    let outcome = manager.load(Arc::new(ExampleEconomyApi::new())).await?;
    if let Some(reason) = outcome.reason() {
        warn!("Economy API example loaded without its command: {}", reason);
    }

    host.fire(ServerEvent::simple(EventType::ServerLoad)).await;

    if !args.exec.is_empty() {
        let sender = mcengine_core::ConsoleSender::new();
        for line in &args.exec {
            match cli::handle_line(&host, &manager, &sender, line) {
                cli::ConsoleAction::Output(out) => out.iter().for_each(|l| println!("{}", l)),
                cli::ConsoleAction::Quit => break,
            }
        }
        manager.disload_all().await;
        return Ok(());
    }

    println!("Type \"list\" for commands, \"extensions\" for extensions, \"?<partial>\" to complete, \"quit\" to exit.");
    cli::run_console(host, &manager).await
}
