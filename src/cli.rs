// src/cli.rs
//! Headless frontend: load, filter, write one document.

use std::io::{ self, Write };
use std::path::PathBuf;

use clap::{ Parser, ValueEnum };
use tracing::{ info, warn };

use crate::config::consts::DEFAULT_OUT_DIR;
use crate::config::options::{ AppOptions, ExportFormat, LoadOptions };
use crate::core::sanitize::file_stem_for;
use crate::csv::HeaderMode;
use crate::file;
use crate::filter::{ Criteria, Range, SortKey, YesNo };
use crate::loader::{ LoadError, PendingLoad, Source };
use crate::progress::Progress;
use crate::record::Dataset;
use crate::render::factsheet::FactSheet;

#[derive(Parser, Debug)]
#[command(
    name = "robot_guide",
    version,
    about = "Render the Busy Teachers' Guide to Robots from a CSV sheet"
)]
pub struct Cli {
    /// CSV path or http(s) URL [default: $ROBOT_GUIDE_SOURCE, then robots.csv]
    #[arg(long)]
    pub source: Option<String>,

    /// Where the column names are
    #[arg(long, value_enum, default_value_t = HeaderArg::Auto)]
    pub header_mode: HeaderArg,

    /// Case-insensitive substring of Name or Manufacturer
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Exact manufacturer
    #[arg(long)]
    pub manufacturer: Option<String>,

    /// Min Grade Level to keep (repeatable)
    #[arg(long = "grade")]
    pub grades: Vec<String>,

    #[arg(long, value_enum, default_value_t = YesNoArg::Any)]
    pub rechargeable: YesNoArg,

    #[arg(long, value_enum, default_value_t = YesNoArg::Any)]
    pub batteries: YesNoArg,

    /// Only robots sold as a classroom set
    #[arg(long)]
    pub available_only: bool,

    #[arg(long)]
    pub price_min: Option<f64>,
    #[arg(long)]
    pub price_max: Option<f64>,

    #[arg(long)]
    pub age_min: Option<f64>,
    #[arg(long)]
    pub age_max: Option<f64>,

    #[arg(long, value_enum, default_value_t = SortArg::Source)]
    pub sort: SortArg,

    #[arg(long, value_enum, default_value_t = FormatArg::Html)]
    pub format: FormatArg,

    /// Output file [default: stdout]
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Write the one-page fact sheet for this robot instead of the dashboard
    #[arg(long, value_name = "NAME")]
    pub factsheet: Option<String>,

    /// Drop rows without a Name or Manufacturer
    #[arg(long)]
    pub drop_incomplete: bool,

    /// Open the written file (writes under out/ when no -o is given)
    #[arg(long)]
    pub open: bool,

    /// Fail when any row did not match the header width
    #[arg(long)]
    pub strict: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum HeaderArg {
    Auto,
    FirstRow,
    SkipDescription,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum YesNoArg {
    Any,
    Yes,
    No,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SortArg {
    Source,
    Price,
    MinAge,
    Name,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    Html,
    Csv,
    Tsv,
}

impl From<HeaderArg> for HeaderMode {
    fn from(v: HeaderArg) -> Self {
        match v {
            HeaderArg::Auto => HeaderMode::Auto,
            HeaderArg::FirstRow => HeaderMode::FirstRow,
            HeaderArg::SkipDescription => HeaderMode::SkipDescription,
        }
    }
}

impl From<YesNoArg> for YesNo {
    fn from(v: YesNoArg) -> Self {
        match v {
            YesNoArg::Any => YesNo::Any,
            YesNoArg::Yes => YesNo::Yes,
            YesNoArg::No => YesNo::No,
        }
    }
}

impl From<SortArg> for SortKey {
    fn from(v: SortArg) -> Self {
        match v {
            SortArg::Source => SortKey::Source,
            SortArg::Price => SortKey::Price,
            SortArg::MinAge => SortKey::MinAge,
            SortArg::Name => SortKey::Name,
        }
    }
}

impl From<FormatArg> for ExportFormat {
    fn from(v: FormatArg) -> Self {
        match v {
            FormatArg::Html => ExportFormat::Html,
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Tsv => ExportFormat::Tsv,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("No robot named {0:?}")]
    NoSuchRobot(String),

    #[error("{0} row(s) did not match the header width")]
    RowWarnings(usize),
}

/// Load progress as log lines.
struct LogProgress;

impl Progress for LogProgress {
    fn log(&mut self, msg: &str) {
        info!("{msg}");
    }
    fn finish(&mut self, records: usize, warnings: usize) {
        info!("Loaded {records} robots ({warnings} malformed rows)");
    }
}

fn bounds(min: Option<f64>, max: Option<f64>) -> Option<Range> {
    match (min, max) {
        (None, None) => None,
        (lo, hi) => Some(Range::new(lo.unwrap_or(f64::NEG_INFINITY), hi.unwrap_or(f64::INFINITY))),
    }
}

impl Cli {
    pub fn options(&self) -> AppOptions {
        let mut load = LoadOptions::from_env();
        if let Some(src) = &self.source {
            load.source = Source::parse(src);
        }
        load.header_mode = self.header_mode.into();
        load.drop_incomplete = self.drop_incomplete;

        let criteria = Criteria {
            query: self.query.clone(),
            manufacturer: self.manufacturer.clone(),
            grades: self.grades.iter().map(|g| s!(g.trim())).collect(),
            rechargeable: self.rechargeable.into(),
            batteries: self.batteries.into(),
            available_only: self.available_only,
            price: bounds(self.price_min, self.price_max),
            min_age: bounds(self.age_min, self.age_max),
        };

        let mut opts = AppOptions { load, criteria, sort: self.sort.into(), ..AppOptions::default() };
        opts.export.format = self.format.into();
        if let Some(out) = &self.out {
            opts.export.set_path(&out.to_string_lossy());
        }
        opts
    }

    /// Output file, or `None` for stdout. The dashboard path goes through
    /// `ExportOptions`, so a bare `-o out/list` gets the format's extension.
    /// A fact sheet is written exactly where `-o` says.
    pub fn target(&self, opts: &AppOptions, factsheet_title: Option<&str>) -> Option<PathBuf> {
        if self.out.is_none() && !self.open {
            return None;
        }
        Some(match factsheet_title {
            Some(title) => self.out.clone().unwrap_or_else(|| {
                PathBuf::from(DEFAULT_OUT_DIR).join(format!("{}.html", file_stem_for(title)))
            }),
            None => opts.export.out_path(),
        })
    }
}

/// Find a robot by exact (case-insensitive) name in the full dataset.
pub fn find_robot<'a>(ds: &'a Dataset, name: &str) -> Option<&'a crate::record::Record> {
    let want = name.trim();
    ds.iter()
        .find(|r| r.name().is_some_and(|n| n.trim().eq_ignore_ascii_case(want)))
}

pub fn run(cli: Cli) -> Result<(), CliError> {
    let opts = cli.options();

    let ds = PendingLoad::spawn(opts.load.clone(), LogProgress).wait()?;
    for w in &ds.warnings {
        warn!("{w}");
    }
    if cli.strict && !ds.warnings.is_empty() {
        return Err(CliError::RowWarnings(ds.warnings.len()));
    }

    let (body, title) = match &cli.factsheet {
        Some(name) => {
            let rec = find_robot(&ds, name).ok_or_else(|| CliError::NoSuchRobot(s!(name)))?;
            let sheet = FactSheet::from_record(rec);
            (sheet.to_html(), Some(sheet.title))
        }
        None => (file::render_export(opts.export.format, &ds, &opts.criteria, opts.sort)?, None),
    };

    let target = cli.target(&opts, title.as_deref());
    match target {
        Some(path) => {
            file::write_to(&path, &body)?;
            eprintln!("Wrote {}", path.display());
            if cli.open {
                open::that(&path)?;
            }
        }
        None => {
            let mut out = io::stdout().lock();
            out.write_all(body.as_bytes())?;
            out.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_to_options() {
        let cli = Cli::parse_from([
            "robot_guide",
            "--source", "sheet.csv",
            "-q", "robo",
            "--grade", "K",
            "--grade", "2",
            "--batteries", "no",
            "--price-max", "150",
            "--sort", "min-age",
            "--format", "tsv",
            "-o", "out/list",
        ]);
        let opts = cli.options();
        assert_eq!(opts.load.source, Source::parse("sheet.csv"));
        assert_eq!(opts.criteria.query, "robo");
        assert_eq!(opts.criteria.grades, vec!["K", "2"]);
        assert_eq!(opts.criteria.batteries, YesNo::No);
        let price = opts.criteria.price.unwrap();
        assert!(price.contains(0.0) && price.contains(150.0) && !price.contains(150.01));
        assert_eq!(opts.sort, SortKey::MinAge);
        assert_eq!(opts.export.out_path(), PathBuf::from("out/list.tsv"));
    }

    #[test]
    fn defaults_are_the_bare_query() {
        let opts = Cli::parse_from(["robot_guide"]).options();
        assert!(opts.criteria.is_query_only());
        assert_eq!(opts.export.format, ExportFormat::Html);
    }

    #[test]
    fn output_target_follows_format_and_flags() {
        let tsv = Cli::parse_from(["robot_guide", "--format", "tsv", "-o", "out/list"]);
        assert_eq!(tsv.target(&tsv.options(), None), Some(PathBuf::from("out/list.tsv")));

        let typed = Cli::parse_from(["robot_guide", "--format", "csv", "-o", "out/list.txt"]);
        assert_eq!(typed.target(&typed.options(), None), Some(PathBuf::from("out/list.txt")));

        let open = Cli::parse_from(["robot_guide", "--open"]);
        assert_eq!(open.target(&open.options(), None), Some(PathBuf::from("out").join("dashboard.html")));

        let sheet = Cli::parse_from(["robot_guide", "--factsheet", "Bee-Bot", "--open"]);
        assert_eq!(
            sheet.target(&sheet.options(), Some("Bee-Bot")),
            Some(PathBuf::from("out").join(format!("{}.html", file_stem_for("Bee-Bot"))))
        );

        let sheet_out = Cli::parse_from(["robot_guide", "--factsheet", "Bee-Bot", "-o", "bee"]);
        assert_eq!(sheet_out.target(&sheet_out.options(), Some("Bee-Bot")), Some(PathBuf::from("bee")));

        let stdout = Cli::parse_from(["robot_guide"]);
        assert_eq!(stdout.target(&stdout.options(), None), None);
    }

    #[test]
    fn factsheet_lookup_ignores_case() {
        let ds = Dataset {
            headers: vec![s!("Name")],
            records: vec![record! { "Name" => "Bee-Bot " }],
            warnings: Vec::new(),
        };
        assert!(find_robot(&ds, "bee-bot").is_some());
        assert!(find_robot(&ds, "bee").is_none());
    }
}
