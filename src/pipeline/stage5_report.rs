use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::model::table::ResultsTable;
use crate::report::json::{render_averaged_json, render_summary_json};
use crate::report::text::render_report_text;
use crate::report::{RunInfo, format_cell, summarize_conditions};

#[derive(Debug, Clone)]
pub struct Stage5Input<'a> {
    pub run: RunInfo,
    pub averaged: &'a ResultsTable,
    pub metrics: &'a [String],
    pub columns_to_keep: &'a [String],
}

pub fn write_reports(input: &Stage5Input<'_>, out_dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;

    write_averaged_tsv(input.averaged, &out_dir.join("averaged.tsv"))?;

    let averaged_json = serde_json::to_string_pretty(&render_averaged_json(input.averaged))
        .map_err(std::io::Error::other)?;
    write_text(&out_dir.join("averaged.json"), &averaged_json)?;

    let conditions = summarize_conditions(input.averaged, input.metrics, input.columns_to_keep);
    let summary = render_summary_json(&input.run, input.metrics, &conditions, input.averaged)
        .map_err(std::io::Error::other)?;
    write_text(&out_dir.join("summary.json"), &summary)?;

    let report = render_report_text(&input.run, &conditions);
    write_text(&out_dir.join("report.txt"), &report)?;

    tracing::info!("reports written to {}", out_dir.display());
    Ok(())
}

fn write_averaged_tsv(table: &ResultsTable, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let names = table.column_names();
    writeln!(w, "{}", names.join("\t"))?;
    for row in 0..table.n_rows() {
        let fields = names
            .iter()
            .map(|name| table.value(row, name).map(format_cell).unwrap_or_default())
            .collect::<Vec<_>>();
        writeln!(w, "{}", fields.join("\t"))?;
    }
    w.flush()
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
