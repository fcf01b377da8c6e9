// src/config/options.rs
use std::ffi::OsString;
use std::path::{ Path, PathBuf };

use super::consts::*;
use crate::csv::HeaderMode;
use crate::filter::{ Criteria, SortKey };
use crate::loader::Source;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppOptions {
    pub load: LoadOptions,
    pub criteria: Criteria,
    pub sort: SortKey,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadOptions {
    pub source: Source,
    pub header_mode: HeaderMode,
    /// Drop records whose Name or Manufacturer is empty.
    pub drop_incomplete: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            source: Source::parse(DEFAULT_SOURCE),
            header_mode: HeaderMode::Auto,
            drop_incomplete: false,
        }
    }
}

impl LoadOptions {
    /// Defaults, with the source taken from `ROBOT_GUIDE_SOURCE` when set.
    pub fn from_env() -> Self {
        let mut opts = Self::default();
        if let Ok(v) = std::env::var(SOURCE_ENV) {
            let v = v.trim();
            if !v.is_empty() {
                opts.source = Source::parse(v);
            }
        }
        opts
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Html,
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Html => "html",
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
        }
    }

    /// Field separator for the tabular formats.
    pub fn delim(&self) -> Option<u8> {
        match self {
            ExportFormat::Html => None,
            ExportFormat::Csv => Some(b','),
            ExportFormat::Tsv => Some(b'\t'),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
}

impl ExportOptions {
    pub fn out_path(&self) -> PathBuf {
        let ext = self
            .out_path
            .ext
            .as_ref()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_else(|| s!(self.format.ext()));
        let stem = self.out_path.file_stem.to_string_lossy();
        self.out_path.dir.join(format!("{stem}.{ext}"))
    }

    /// Split user text into dir + stem (+ extension, if one was typed).
    /// Without an explicit extension the format decides it.
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        self.out_path.dir = p
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        self.out_path.ext = p.extension().map(|e| e.to_os_string());
    }

    pub fn is_default_path(&self) -> bool {
        self.out_path == OutputPath::default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
    ext: Option<OsString>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            ext: None,
        }
    }
}
