// src/file.rs
//! Export bodies and writing them to disk.

use std::{
    fs,
    io,
    path::{ Path, PathBuf },
};

use tracing::info;

use crate::config::options::{ ExportFormat, ExportOptions };
use crate::csv::rows_to_string;
use crate::filter::{ Criteria, FilteredView, SortKey };
use crate::record::Dataset;
use crate::render::{ glance, html::render_dashboard_page, render_cards };

/// Build the export body for `format`.
///
/// HTML carries every card that passes the facets and hides the ones the
/// text query rejects, so the page's own search box still covers them.
/// CSV/TSV carry the glance columns for the fully filtered view.
pub fn render_export(
    format: ExportFormat,
    dataset: &Dataset,
    criteria: &Criteria,
    sort: SortKey,
) -> Result<String, ::csv::Error> {
    match format.delim() {
        None => {
            let facets_only = Criteria { query: s!(), ..criteria.clone() };
            let view = FilteredView::apply(dataset, &facets_only, sort);
            let cards = render_cards(view.records(dataset));
            Ok(render_dashboard_page(&cards, &criteria.query))
        }
        Some(delim) => {
            let view = FilteredView::apply(dataset, criteria, sort);
            let rows = glance::rows(dataset, &view);
            rows_to_string(Some(&glance::headers()), &rows, delim)
        }
    }
}

/// Write `contents` to `export.out_path()`, creating parent dirs.
/// Returns the final path written to.
pub fn write_export(export: &ExportOptions, contents: &str) -> io::Result<PathBuf> {
    let path = export.out_path();
    write_to(&path, contents)?;
    Ok(path)
}

pub fn write_to(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        ensure_directory(parent)?;
    }
    fs::write(path, contents)?;
    info!("Export: wrote {} ({} bytes)", path.display(), contents.len());
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.as_os_str().is_empty() || dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        Dataset {
            headers: glance::headers(),
            records: vec![
                record! { "Name" => "Cue", "Manufacturer" => "Wonder Workshop", "Price" => "$199.99" },
                record! { "Name" => "Bee-Bot", "Manufacturer" => "TTS", "Price" => "$89.95" },
            ],
            warnings: Vec::new(),
        }
    }

    #[test]
    fn tsv_uses_glance_columns() {
        let out = render_export(ExportFormat::Tsv, &dataset(), &Criteria::default(), SortKey::Source).unwrap();
        let mut lines = out.lines();
        assert!(lines.next().unwrap().starts_with("Name\tManufacturer\tPrice"));
        assert!(lines.next().unwrap().starts_with("Bee-Bot\tTTS\t$89.95"));
        assert_eq!(lines.count(), 1);
    }

    #[test]
    fn html_keeps_query_rejects_hidden() {
        let out = render_export(ExportFormat::Html, &dataset(), &Criteria::with_query("bee"), SortKey::Source)
            .unwrap();
        assert!(out.contains("Showing 1 matching robots"));
        assert_eq!(out.matches("class=\"robot-card\"").count(), 2);
    }
}
