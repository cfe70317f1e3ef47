pub mod segment;
pub mod top_tie;

use rayon::prelude::*;
use tracing::debug;

use crate::Score;
use crate::config::ModerationConfig;
use crate::error::{ModerationError, Result};
use crate::model::{AnchorSet, Cohort, Placement};

pub use segment::{interpolate, map_segment};
pub use top_tie::{TieResolution, exam_top, resolve_top_tie};

/// Result of one moderation run.
#[derive(Debug, Clone)]
pub struct ModeratedCohort {
    /// The input cohort with every student's `moderated` score filled in.
    pub cohort: Cohort,
    pub sac_anchors: AnchorSet,
    pub exam_anchors: AnchorSet,
    pub tie: TieResolution,
    /// How each student's SAC score was placed, in student order.
    pub placements: Vec<Placement>,
    pub config: ModerationConfig,
}

impl ModeratedCohort {
    pub fn moderated_scores(&self) -> Vec<Score> {
        self.cohort.moderated_scores()
    }
}

/// Moderates raw score sequences with the default configuration.
pub fn moderate(sac: &[Score], exam: &[Score]) -> Result<Vec<Score>> {
    let cohort = Cohort::from_scores(sac, exam)?;
    moderate_cohort(&cohort, &ModerationConfig::default()).map(|m| m.moderated_scores())
}

pub fn moderate_cohort(cohort: &Cohort, config: &ModerationConfig) -> Result<ModeratedCohort> {
    let sac = cohort.sac_scores();
    let exam = cohort.exam_scores();

    let (sac_anchors, exam_anchors, tie) = compute_anchors(&sac, &exam, config)?;
    debug!(?sac_anchors, ?exam_anchors, "computed anchors");

    let mut moderated = Vec::with_capacity(sac.len());
    let mut placements = Vec::with_capacity(sac.len());
    for (index, &score) in sac.iter().enumerate() {
        let (placement, value) = moderate_score(index, score, &sac_anchors, &exam_anchors)?;
        moderated.push(to_score(config.rounding.apply(value)));
        placements.push(placement);
    }

    Ok(ModeratedCohort {
        cohort: cohort.with_moderated(&moderated),
        sac_anchors,
        exam_anchors,
        tie,
        placements,
        config: *config,
    })
}

/// Moderates independent cohorts in parallel. Results keep the input order
/// and a failing cohort does not affect the others.
pub fn moderate_batch(
    cohorts: &[Cohort],
    config: &ModerationConfig,
) -> Vec<Result<ModeratedCohort>> {
    cohorts
        .par_iter()
        .map(|cohort| moderate_cohort(cohort, config))
        .collect()
}

/// SAC anchors, exam anchors (top from tie resolution, floored at exam q3)
/// and the raw tie details.
pub fn compute_anchors(
    sac: &[Score],
    exam: &[Score],
    config: &ModerationConfig,
) -> Result<(AnchorSet, AnchorSet, TieResolution)> {
    let sac_f = to_f64(sac);
    let exam_f = to_f64(exam);
    let sac_anchors = AnchorSet::from_scores(&sac_f)?;
    let tie = resolve_top_tie(sac, exam, config.top_tie)?;
    let exam_quartiles = AnchorSet::from_scores(&exam_f)?;
    // The top anchor never sits below q3, otherwise scores above the SAC q3
    // would be pushed under lower-ranked students.
    let exam_anchors = exam_quartiles.with_top(tie.exam_top.max(exam_quartiles.q3));
    Ok((sac_anchors, exam_anchors, tie))
}

fn moderate_score(
    index: usize,
    score: Score,
    sac: &AnchorSet,
    exam: &AnchorSet,
) -> Result<(Placement, f64)> {
    let s = f64::from(score);
    match sac.place(s) {
        Some(Placement::Anchor(anchor)) => Ok((Placement::Anchor(anchor), exam.get(anchor))),
        Some(Placement::Segment(seg)) => {
            let (src_min, src_max) = sac.range(seg);
            let (dst_min, dst_max) = exam.range(seg);
            let value = interpolate(src_min, src_max, dst_min, dst_max, s)?;
            Ok((Placement::Segment(seg), value))
        }
        None => Err(ModerationError::UnclassifiedScore { index, score }),
    }
}

fn to_f64(values: &[Score]) -> Vec<f64> {
    values.iter().map(|&v| f64::from(v)).collect()
}

// Exam anchors are non-negative, so rounded results fit a Score.
fn to_score(value: f64) -> Score {
    value.max(0.0) as Score
}

#[cfg(test)]
#[path = "../../tests/src_inline/moderation/mod.rs"]
mod tests;
