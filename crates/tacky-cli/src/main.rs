mod cli;
mod context;
mod handlers;
mod output;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use cli::{Cli, Commands};
use context::CliContext;
use tacky_core::AppConfig;
use tacky_domain::{BoardId, Workspace};
use tacky_persistence::{BackgroundSaver, BoardStorage, FileKeyValueStore};
use tacky_tui::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("TACKY_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();
    let config = AppConfig::load();
    let data_dir: PathBuf = cli
        .data_dir
        .clone()
        .unwrap_or_else(|| config.effective_data_dir());

    match cli.command {
        None => {
            let storage = Arc::new(BoardStorage::new(FileKeyValueStore::new(&data_dir)));
            let workspace = Workspace::new(storage.load());
            tracing::info!(
                "Opening {} boards from {}",
                workspace.boards().len(),
                data_dir.display()
            );
            let mut app = App::new(workspace, cli.board.map(BoardId::from), &config)?
                .with_saver(BackgroundSaver::spawn(storage));
            app.run().await?;
        }
        Some(cmd) => {
            let mut ctx = CliContext::load(&data_dir);

            let result = match cmd {
                Commands::Board(board_cmd) => {
                    handlers::board::handle(&mut ctx, board_cmd.action).await
                }
                Commands::List(list_cmd) => handlers::list::handle(&mut ctx, list_cmd.action).await,
                Commands::Card(card_cmd) => handlers::card::handle(&mut ctx, card_cmd.action).await,
                Commands::Export(args) => handlers::export::handle_export(&ctx, args).await,
                Commands::Import(args) => handlers::export::handle_import(&mut ctx, args).await,
            };
            if let Err(e) = result {
                output::output_error(&e.to_string());
            }
        }
    }

    Ok(())
}
