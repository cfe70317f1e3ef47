use serde::Serialize;

use crate::error::Result;
use crate::stats::quantile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    Zero,
    Q1,
    Median,
    Q3,
    Top,
}

/// Open interval between two consecutive anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Segment {
    ZeroQ1,
    Q1Median,
    MedianQ3,
    Q3Top,
}

/// How a single score was placed against the SAC anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Anchor(Anchor),
    Segment(Segment),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnchorSet {
    pub zero: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub top: f64,
}

impl Anchor {
    pub const ALL: [Anchor; 5] = [
        Anchor::Zero,
        Anchor::Q1,
        Anchor::Median,
        Anchor::Q3,
        Anchor::Top,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Anchor::Zero => "zero",
            Anchor::Q1 => "q1",
            Anchor::Median => "median",
            Anchor::Q3 => "q3",
            Anchor::Top => "top",
        }
    }
}

impl Segment {
    pub const ALL: [Segment; 4] = [
        Segment::ZeroQ1,
        Segment::Q1Median,
        Segment::MedianQ3,
        Segment::Q3Top,
    ];

    pub fn bounds(self) -> (Anchor, Anchor) {
        match self {
            Segment::ZeroQ1 => (Anchor::Zero, Anchor::Q1),
            Segment::Q1Median => (Anchor::Q1, Anchor::Median),
            Segment::MedianQ3 => (Anchor::Median, Anchor::Q3),
            Segment::Q3Top => (Anchor::Q3, Anchor::Top),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Segment::ZeroQ1 => "zero-q1",
            Segment::Q1Median => "q1-median",
            Segment::MedianQ3 => "median-q3",
            Segment::Q3Top => "q3-top",
        }
    }
}

impl Placement {
    pub fn label(self) -> String {
        match self {
            Placement::Anchor(a) => format!("anchor:{}", a.name()),
            Placement::Segment(s) => format!("segment:{}", s.name()),
        }
    }
}

impl AnchorSet {
    /// Zero plus the 25th/50th/75th percentiles of `values`; `top` is the
    /// maximum. The exam side replaces `top` with the tie-resolved value.
    pub fn from_scores(values: &[f64]) -> Result<Self> {
        Ok(Self {
            zero: 0.0,
            q1: quantile(values, 0.25)?,
            median: quantile(values, 0.5)?,
            q3: quantile(values, 0.75)?,
            top: quantile(values, 1.0)?,
        })
    }

    pub fn with_top(self, top: f64) -> Self {
        Self { top, ..self }
    }

    pub fn get(&self, anchor: Anchor) -> f64 {
        match anchor {
            Anchor::Zero => self.zero,
            Anchor::Q1 => self.q1,
            Anchor::Median => self.median,
            Anchor::Q3 => self.q3,
            Anchor::Top => self.top,
        }
    }

    pub fn range(&self, segment: Segment) -> (f64, f64) {
        let (lo, hi) = segment.bounds();
        (self.get(lo), self.get(hi))
    }

    pub fn values(&self) -> [f64; 5] {
        [self.zero, self.q1, self.median, self.q3, self.top]
    }

    /// Exact anchor matches win over interval membership, checked in order
    /// zero, q1, median, q3, top.
    pub fn place(&self, score: f64) -> Option<Placement> {
        if let Some(anchor) = Anchor::ALL.into_iter().find(|&a| score == self.get(a)) {
            return Some(Placement::Anchor(anchor));
        }
        Segment::ALL
            .into_iter()
            .find(|&s| {
                let (lo, hi) = self.range(s);
                lo < score && score < hi
            })
            .map(Placement::Segment)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/anchors.rs"]
mod tests;
