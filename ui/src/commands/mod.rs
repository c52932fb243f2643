//! One function per `folio` subcommand. Output goes to the writer passed
//! in so the commands can be driven from tests.

pub mod now_playing;
pub mod projects;
pub mod theme;

use crate::cli::Commands;
use crate::config::{AppConfig, setup};
use crate::error::{AppError, AppResult};
use crate::theme::{Document, FileStorage, ThemeManager};
use server::content::ProjectStore;
use std::io::Write;
use tokio_util::sync::CancellationToken;

/// The persisted theme state, at `[theme] state_file` or `~/.config/folio/state.toml`.
pub fn theme_storage(config: &AppConfig) -> AppResult<FileStorage> {
    let path = match config.theme().state_file() {
        Some(path) => path,
        None => setup::get_state_file_path()?,
    };
    Ok(FileStorage::new(path))
}

/// Cancel `token` on Ctrl-C.
pub fn cancel_on_ctrl_c(token: CancellationToken) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => log::info!("Received Ctrl-C, shutting down"),
            Err(e) => log::error!("Failed to listen for Ctrl-C: {e}"),
        }
        token.cancel();
    });
}

pub async fn run(command: Commands, config: &AppConfig, out: &mut dyn Write) -> AppResult<()> {
    match command {
        Commands::Theme(command) => {
            let mut manager = ThemeManager::new(theme_storage(config)?, Document::new());
            theme::run(command, &mut manager, out)
        }
        Commands::NowPlaying { watch, open } => {
            let source = now_playing::spotify_source(config.spotify())?;
            if watch {
                let shutdown = CancellationToken::new();
                cancel_on_ctrl_c(shutdown.clone());
                now_playing::watch(source, config.spotify().poll_interval(), out, shutdown).await
            } else {
                now_playing::show_once(source.as_ref(), open, out).await?;
                Ok(())
            }
        }
        Commands::Serve { bind } => {
            let addr = match bind {
                Some(addr) => addr,
                None => config
                    .server()
                    .bind_addr()
                    .map_err(|e| AppError::Config(e.user_message()))?,
            };
            let source = now_playing::spotify_source(config.spotify())?;
            let shutdown = CancellationToken::new();
            cancel_on_ctrl_c(shutdown.clone());

            writeln!(out, "Serving http://{addr}{}", server::now_playing::NOW_PLAYING_ROUTE)?;
            out.flush()?;
            server::now_playing::serve(addr, source, shutdown).await?;
            Ok(())
        }
        Commands::Projects { featured } => {
            let store = ProjectStore::new(config.content().projects_dir());
            projects::list(&store, featured, out)
        }
        Commands::Project { slug } => {
            let store = ProjectStore::new(config.content().projects_dir());
            projects::show(&store, &slug, out)
        }
        Commands::Init { dir } => {
            let dir = match dir {
                Some(dir) => dir,
                None => setup::get_config_dir()?,
            };
            let path = setup::initialize_config_dir(&dir)?;
            writeln!(out, "Config file: {}", path.display())?;
            Ok(())
        }
    }
}
