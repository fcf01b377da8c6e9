// src/loader.rs
//! Acquire the CSV text and turn it into a `Dataset`.
//!
//! `load` is the blocking path (CLI, tests). `PendingLoad` runs the same
//! thing on a worker thread and hands back exactly one result over a
//! channel; the GUI polls it once per frame and the CLI can `wait` on it.

use std::fmt;
use std::path::PathBuf;
use std::sync::mpsc::{ self, Receiver, TryRecvError };
use std::thread;

use tracing::{ error, info, warn };

use crate::config::options::LoadOptions;
use crate::core::net;
use crate::progress::Progress;
use crate::record::Dataset;

/// Where the CSV comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Url(String),
}

impl Source {
    /// `http://` / `https://` → URL, anything else is a path.
    pub fn parse(s: &str) -> Self {
        let t = s.trim();
        let lower = t.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Source::Url(s!(t))
        } else {
            Source::File(PathBuf::from(t))
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::File(p) => write!(f, "{}", p.display()),
            Source::Url(u) => f.write_str(u),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to fetch: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("Loader stopped before delivering a result")]
    Interrupted,
}

/// Raw text of the source.
pub fn fetch_text(source: &Source) -> Result<String, LoadError> {
    match source {
        Source::File(path) => std::fs::read_to_string(path)
            .map_err(|source| LoadError::Io { path: path.clone(), source }),
        Source::Url(url) => Ok(net::http_get(url)?),
    }
}

/// Fetch + parse, blocking.
pub fn load(
    opts: &LoadOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Dataset, LoadError> {
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Loading {}…", opts.source));
    }
    info!("Load: Begin source={} mode={}", opts.source, opts.header_mode.label());

    let result = fetch_text(&opts.source).and_then(|text| {
        if let Some(p) = progress.as_deref_mut() {
            p.fetched(text.len());
        }
        Ok(Dataset::parse(&text, opts.header_mode, opts.drop_incomplete)?)
    });

    match &result {
        Ok(ds) => {
            info!(
                "Load: OK records={} headers={} warnings={}",
                ds.len(),
                ds.header_count(),
                ds.warnings.len()
            );
            if !ds.warnings.is_empty() {
                warn!("Load: {} row(s) did not match the header width", ds.warnings.len());
            }
            if let Some(p) = progress.as_deref_mut() {
                p.finish(ds.len(), ds.warnings.len());
            }
        }
        Err(e) => {
            error!("Load: Error source={}: {e}", opts.source);
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Error: {e}"));
            }
        }
    }
    result
}

/// A load running on its own thread; yields one result.
pub struct PendingLoad {
    rx: Receiver<Result<Dataset, LoadError>>,
}

impl PendingLoad {
    pub fn spawn<P>(opts: LoadOptions, mut progress: P) -> Self
    where
        P: Progress + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let result = load(&opts, Some(&mut progress));
            let _ = tx.send(result); // receiver may be gone (window closed)
        });
        Self { rx }
    }

    /// Non-blocking: `Some` exactly once, when the worker is done.
    pub fn try_take(&mut self) -> Option<Result<Dataset, LoadError>> {
        match self.rx.try_recv() {
            Ok(res) => Some(res),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(LoadError::Interrupted)),
        }
    }

    /// Block until the worker delivers.
    pub fn wait(self) -> Result<Dataset, LoadError> {
        self.rx.recv().unwrap_or(Err(LoadError::Interrupted))
    }
}
