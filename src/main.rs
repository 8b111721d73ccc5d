//! Papershelf CLI application entry point
//!
//! Command-line and terminal front end for a static paper list: filter by
//! search term, year, and tags, select papers, and share a link that reopens
//! the list in the same state.
//!
//! # Usage
//!
//! ```bash
//! # Browse a catalog interactively (default command)
//! papershelf browse index.html
//! papershelf b papers.json --url '?include=Neural%20Rendering'
//!
//! # Print the listing for some filters
//! papershelf filter papers.json -s gaussian -y 2023 -t "Real-Time"
//! papershelf f papers.json --url '?selected=3dgs&show_selected=true' --json
//!
//! # Build a share link for a set of papers
//! papershelf share 3dgs nerf -c papers.json --copy
//!
//! # Canonicalize a query string
//! papershelf normalize 'year=all&include=ml&search=deep'
//!
//! # Quiet mode (only output results)
//! papershelf -q list tags papers.json
//! ```
//!
//! # Configuration
//!
//! Settings live in the user's config directory
//! (`~/.config/papershelf/config.toml` on Linux). Logs from interactive
//! sessions go to `papershelf.log` in the user's data directory; set
//! `RUST_LOG` to change verbosity.

use papershelf::{
    PapershelfError,
    cli::{Cli, Commands},
    commands,
    config::ShelfConfig,
    ui::clipboard::SystemClipboard,
};
use std::sync::OnceLock;

type Result<T> = std::result::Result<T, PapershelfError>;

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// Log to stderr; the default level keeps command output clean
fn init_stderr_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Log to a file so the terminal page is not drawn over
fn init_file_logging() {
    let Some(log_dir) = dirs::data_dir().map(|dir| dir.join("papershelf")) else {
        init_stderr_logging();
        return;
    };
    let log_path = log_dir.join("papershelf.log");

    let opened = std::fs::create_dir_all(&log_dir).and_then(|()| {
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
    });

    match opened {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            init_stderr_logging();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    let command = cli.get_command();

    if matches!(command, Commands::Browse { .. }) {
        init_file_logging();
    } else {
        init_stderr_logging();
    }

    let config = ShelfConfig::load()?;
    let quiet = cli.quiet || config.quiet;
    let mut options = config.session_options();

    match command {
        Commands::Browse { catalog, url } => {
            let (path, catalog) = commands::load_catalog(catalog.as_deref(), &config)?;
            options.base_url = commands::page_base_url(&path, &options.base_url);
            commands::browse(&path, catalog, url.as_deref(), options, quiet)?;
        }
        Commands::Filter {
            catalog,
            filter,
            select,
            show_selected,
            json,
        } => {
            let (_, catalog) = commands::load_catalog(catalog.as_deref(), &config)?;
            let mut state = filter.to_url_state();
            if !select.is_empty() {
                state.selected = select;
            }
            state.show_selected |= show_selected;
            commands::filter(catalog, &state, options, json, quiet)?;
        }
        Commands::Share {
            ids,
            catalog,
            base_url,
            filter,
            copy,
        } => {
            let (path, catalog) = commands::load_catalog(catalog.as_deref(), &config)?;
            options.base_url = match base_url {
                Some(base_url) => base_url,
                None => commands::page_base_url(&path, &options.base_url),
            };
            let state = filter.to_url_state();
            commands::share(
                catalog,
                &ids,
                &state,
                options,
                copy,
                SystemClipboard::new(),
                quiet,
            )?;
        }
        Commands::Normalize { query } => commands::normalize(&query),
        Commands::List { variant, catalog } => {
            let (_, catalog) = commands::load_catalog(catalog.as_deref(), &config)?;
            commands::list(&catalog, variant, quiet);
        }
        Commands::Config { command } => commands::config(config, &command, quiet)?,
    }

    Ok(())
}
