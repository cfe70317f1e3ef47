pub mod json;
pub mod text;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::Score;
use crate::moderation::ModeratedCohort;
use crate::stats::mean;

pub const TSV_NAME: &str = "moderated.tsv";
pub const SUMMARY_NAME: &str = "summary.json";
pub const REPORT_NAME: &str = "report.txt";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreStats {
    pub min: Score,
    pub mean: f64,
    pub max: Score,
}

impl ScoreStats {
    pub fn of(values: &[Score]) -> Option<Self> {
        let min = *values.iter().min()?;
        let max = *values.iter().max()?;
        let as_f64: Vec<f64> = values.iter().map(|&v| f64::from(v)).collect();
        let avg = mean(&as_f64)?;
        Some(Self {
            min,
            mean: avg,
            max,
        })
    }
}

pub fn format_f64_2(v: f64) -> String {
    format!("{:.2}", v)
}

pub fn write_reports(result: &ModeratedCohort, out_dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;

    write_moderated_tsv(result, &out_dir.join(TSV_NAME))?;

    let summary = json::render_summary_json(result).map_err(std::io::Error::other)?;
    write_text(&out_dir.join(SUMMARY_NAME), &summary)?;

    write_text(&out_dir.join(REPORT_NAME), &text::render_report_text(result))?;

    info!(out_dir = %out_dir.display(), "wrote reports");
    Ok(())
}

fn write_moderated_tsv(result: &ModeratedCohort, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "index\tname\tsac\texam\tmoderated\tsegment")?;
    for (i, student) in result.cohort.students().iter().enumerate() {
        let moderated = student
            .moderated
            .map(|m| m.to_string())
            .unwrap_or_default();
        let segment = result
            .placements
            .get(i)
            .map(|p| p.label())
            .unwrap_or_default();
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}\t{}",
            i + 1,
            result.cohort.display_name(i),
            student.sac,
            student.exam,
            moderated,
            segment
        )?;
    }
    w.flush()
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
