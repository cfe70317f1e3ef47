use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use thiserror::Error;
use tracing::{info, warn};

use crate::Score;
use crate::error::ModerationError;
use crate::model::{Cohort, Student};

pub mod demo;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error at line {line}: {msg}")]
    Parse { line: usize, msg: String },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid cohort: {0}")]
    Cohort(#[from] ModerationError),
}

const NAME_COLUMNS: [&str; 2] = ["name", "student"];
const SAC_COLUMNS: [&str; 2] = ["sac", "sac_score"];
const EXAM_COLUMNS: [&str; 2] = ["exam", "exam_score"];

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

pub fn load_cohort(path: &Path) -> Result<Cohort, InputError> {
    let reader = open_maybe_gz(path)?;
    let cohort = parse_cohort(reader)?;
    info!(path = %path.display(), students = cohort.len(), "loaded cohort");
    Ok(cohort)
}

/// Reads a tab-separated cohort. The header names the columns; `sac` and
/// `exam` are required, `name` is optional. Blank and `#` lines are skipped.
pub fn parse_cohort<R: BufRead>(mut reader: R) -> Result<Cohort, InputError> {
    let mut buf = String::new();
    let mut line_no = 0usize;

    let header = loop {
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            return Err(InputError::InvalidInput("cohort file is empty".to_string()));
        }
        line_no += 1;
        let line = buf.trim();
        if !line.is_empty() && !line.starts_with('#') {
            break line
                .split('\t')
                .map(|s| s.trim().to_ascii_lowercase())
                .collect::<Vec<_>>();
        }
    };

    let name_col = find_column(&header, &NAME_COLUMNS);
    let sac_col = find_column(&header, &SAC_COLUMNS).ok_or_else(|| InputError::Parse {
        line: line_no,
        msg: "header has no sac column".to_string(),
    })?;
    let exam_col = find_column(&header, &EXAM_COLUMNS).ok_or_else(|| InputError::Parse {
        line: line_no,
        msg: "header has no exam column".to_string(),
    })?;

    let mut students = Vec::new();
    loop {
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            break;
        }
        line_no += 1;
        let line = buf.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        let sac = parse_score(&fields, sac_col, "sac", line_no)?;
        let exam = parse_score(&fields, exam_col, "exam", line_no)?;
        let name = name_col
            .and_then(|c| fields.get(c))
            .map(|s| s.trim())
            .filter(|s| !s.is_empty());
        if name_col.is_some() && name.is_none() {
            warn!(line = line_no, "student row has an empty name");
        }
        students.push(Student {
            name: name.map(str::to_string),
            ..Student::new(sac, exam)
        });
    }

    Ok(Cohort::new(students)?)
}

fn find_column(header: &[String], names: &[&str]) -> Option<usize> {
    header.iter().position(|h| names.contains(&h.as_str()))
}

fn parse_score(
    fields: &[&str],
    col: usize,
    what: &str,
    line: usize,
) -> Result<Score, InputError> {
    let raw = fields.get(col).map(|s| s.trim()).unwrap_or("");
    if raw.is_empty() {
        return Err(InputError::Parse {
            line,
            msg: format!("missing {what} score"),
        });
    }
    raw.parse::<Score>().map_err(|_| InputError::Parse {
        line,
        msg: format!("{what} score '{raw}' is not a non-negative integer"),
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
