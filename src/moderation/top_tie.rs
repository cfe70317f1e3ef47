use serde::Serialize;
use tracing::debug;

use crate::Score;
use crate::config::TopTiePolicy;
use crate::error::{ModerationError, Result};
use crate::stats::mean;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TieResolution {
    /// Highest SAC score in the cohort.
    pub biggest: Score,
    /// Number of students holding `biggest`.
    pub occurrence: usize,
    pub exam_top: f64,
}

/// Exam-side top anchor under the default policy: the mean of the
/// `occurrence` highest exam scores of the whole cohort.
pub fn exam_top(sac: &[Score], exam: &[Score]) -> Result<f64> {
    resolve_top_tie(sac, exam, TopTiePolicy::TopExamOverall).map(|r| r.exam_top)
}

pub fn resolve_top_tie(
    sac: &[Score],
    exam: &[Score],
    policy: TopTiePolicy,
) -> Result<TieResolution> {
    if sac.is_empty() || exam.is_empty() {
        return Err(ModerationError::InvalidInput(
            "top tie resolution needs non-empty score sequences".to_string(),
        ));
    }
    if sac.len() != exam.len() {
        return Err(ModerationError::InvalidInput(format!(
            "SAC and exam sequences differ in length ({} vs {})",
            sac.len(),
            exam.len()
        )));
    }

    let (biggest, occurrence) = max_with_count(sac);
    let selected = match policy {
        TopTiePolicy::TopExamOverall => top_n_in_order(exam, occurrence),
        TopTiePolicy::TiedStudents => sac
            .iter()
            .zip(exam)
            .filter(|(s, _)| **s == biggest)
            .map(|(_, &e)| e)
            .collect(),
    };
    let selected: Vec<f64> = selected.into_iter().map(f64::from).collect();
    let exam_top = mean(&selected).ok_or_else(|| {
        ModerationError::InvalidInput("no exam scores selected for the top anchor".to_string())
    })?;

    debug!(biggest, occurrence, exam_top, ?policy, "resolved top SAC tie");

    Ok(TieResolution {
        biggest,
        occurrence,
        exam_top,
    })
}

fn max_with_count(values: &[Score]) -> (Score, usize) {
    let mut biggest = values[0];
    let mut count = 0usize;
    for &v in values {
        if v > biggest {
            biggest = v;
            count = 1;
        } else if v == biggest {
            count += 1;
        }
    }
    (biggest, count)
}

/// Bounded top-`n` scan: seed with the first `n` values in sequence order,
/// then let each later value evict the current smallest if it is strictly
/// larger.
fn top_n_in_order(values: &[Score], n: usize) -> Vec<Score> {
    let mut selected: Vec<Score> = Vec::with_capacity(n);
    for &v in values {
        if selected.len() < n {
            selected.push(v);
            continue;
        }
        if let Some((idx, &min)) = selected.iter().enumerate().min_by_key(|(_, s)| **s)
            && v > min
        {
            selected[idx] = v;
        }
    }
    selected
}

#[cfg(test)]
#[path = "../../tests/src_inline/moderation/top_tie.rs"]
mod tests;
