//! Cohort score moderation.
//!
//! Internal (SAC) scores are rescaled onto the external exam scale with a
//! five-point piecewise-linear mapping anchored at zero, the quartiles and
//! the top of each distribution. Ranks are preserved.

pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod model;
pub mod moderation;
pub mod report;
pub mod stats;

pub use config::{ModerationConfig, RoundingMode, TopTiePolicy};
pub use error::ModerationError;
pub use model::{Anchor, AnchorSet, Cohort, Segment, Student};
pub use moderation::{
    ModeratedCohort, exam_top, map_segment, moderate, moderate_batch, moderate_cohort,
};
pub use stats::quantile;

pub type Score = u32;
