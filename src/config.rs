use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ModerationConfig {
    pub rounding: RoundingMode,
    pub top_tie: TopTiePolicy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RoundingMode {
    /// Ties go to the even neighbour (45.5 -> 46, 44.5 -> 44).
    #[default]
    HalfEven,
    /// Ties go away from zero.
    HalfUp,
}

/// How the exam-side top anchor is chosen when several students share the
/// highest SAC score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TopTiePolicy {
    /// Mean of the `k` highest exam scores in the whole cohort, where `k` is
    /// the number of students tied at the SAC maximum.
    #[default]
    #[value(name = "overall")]
    TopExamOverall,
    /// Mean of the exam scores held by the tied students themselves.
    TiedStudents,
}

impl RoundingMode {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            RoundingMode::HalfEven => value.round_ties_even(),
            RoundingMode::HalfUp => value.round(),
        }
    }
}

impl ModerationConfig {
    pub fn new(rounding: RoundingMode, top_tie: TopTiePolicy) -> Self {
        Self { rounding, top_tie }
    }
}
