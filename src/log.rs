// src/log.rs
//! Tracing setup for both frontends. `RUST_LOG` overrides the default filter.

use std::fs::{ self, OpenOptions };
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::consts::{ DEFAULT_LOG_FILTER, LOG_FILE, STORE_DIR };

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

pub fn log_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(LOG_FILE)
}

/// CLI: human-readable lines on stderr (stdout may carry the export).
pub fn init_cli() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// GUI: append to `.store/debug.log`; stderr if the file can't be opened.
pub fn init_gui() {
    let path = log_path();
    let file = path
        .parent()
        .map_or(Ok(()), fs::create_dir_all)
        .and_then(|_| OpenOptions::new().create(true).append(true).open(&path));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false);

    let _ = match file {
        Ok(f) => builder.with_writer(Mutex::new(f)).try_init(),
        Err(e) => {
            eprintln!("Log file {} unavailable ({e}); logging to stderr", path.display());
            builder.with_writer(std::io::stderr).try_init()
        }
    };
}
