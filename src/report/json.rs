use serde::Serialize;

use crate::config::ModerationConfig;
use crate::model::AnchorSet;
use crate::moderation::{ModeratedCohort, TieResolution};
use crate::report::ScoreStats;

#[derive(Debug, Serialize)]
pub struct Summary {
    pub tool: &'static str,
    pub version: &'static str,
    pub config: ModerationConfig,
    pub n_students: usize,
    pub sac_anchors: AnchorSet,
    pub exam_anchors: AnchorSet,
    pub tie: TieResolution,
    pub scores: ScoreSummary,
}

#[derive(Debug, Serialize)]
pub struct ScoreSummary {
    pub sac: Option<ScoreStats>,
    pub exam: Option<ScoreStats>,
    pub moderated: Option<ScoreStats>,
}

pub fn build_summary(result: &ModeratedCohort) -> Summary {
    let cohort = &result.cohort;
    Summary {
        tool: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        config: result.config,
        n_students: cohort.len(),
        sac_anchors: result.sac_anchors,
        exam_anchors: result.exam_anchors,
        tie: result.tie,
        scores: ScoreSummary {
            sac: ScoreStats::of(&cohort.sac_scores()),
            exam: ScoreStats::of(&cohort.exam_scores()),
            moderated: ScoreStats::of(&cohort.moderated_scores()),
        },
    }
}

pub fn render_summary_json(result: &ModeratedCohort) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(&build_summary(result))?;
    out.push('\n');
    Ok(out)
}
