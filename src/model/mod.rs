pub mod anchors;
pub mod cohort;

pub use anchors::{Anchor, AnchorSet, Placement, Segment};
pub use cohort::{Cohort, MIN_COHORT_SIZE, Student};
