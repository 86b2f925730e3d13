use crate::activity::{ActivityLog, SqliteActivityLog};
use crate::archive::Archive;
use crate::cli::render;
use crate::cli::{Cli, Commands, menu};
use crate::config::Config;
use crate::prompts::ContentKind;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    let config = Arc::new(config);

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => menu::run_menu(&config).await,

        Commands::Serve { port, host } => {
            let port = port.unwrap_or(config.gateway.port);
            let host = host.unwrap_or_else(|| config.gateway.host.clone());
            if port == 0 {
                info!("Starting MarketMind gateway on {host} (random port)");
            } else {
                info!("Starting MarketMind gateway on {host}:{port}");
            }
            crate::gateway::run_gateway(&host, port, Arc::clone(&config)).await
        }

        Commands::Stats => {
            let log = SqliteActivityLog::open(&config.activity_db_path()).await?;
            let stats = log
                .stats(config.prompts.recent_activity_limit)
                .await
                .context("read activity log")?;
            print!("{}", render::stats_table(&stats));
            Ok(())
        }

        Commands::Saved { kind, index } => {
            let archive = Archive::new(config.archive_dir());
            menu::print_saved(&archive, ContentKind::from(kind), index);
            Ok(())
        }
    }
}
