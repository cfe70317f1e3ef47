use crate::Score;
use crate::error::{ModerationError, Result};

pub const MIN_COHORT_SIZE: usize = 2;

/// One student: both assessed scores and the derived moderated score live on
/// the same record, so an index always refers to a single student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub name: Option<String>,
    pub sac: Score,
    pub exam: Score,
    pub moderated: Option<Score>,
}

impl Student {
    pub fn new(sac: Score, exam: Score) -> Self {
        Self {
            name: None,
            sac,
            exam,
            moderated: None,
        }
    }

    pub fn named(name: impl Into<String>, sac: Score, exam: Score) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new(sac, exam)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cohort {
    students: Vec<Student>,
}

impl Cohort {
    pub fn new(students: Vec<Student>) -> Result<Self> {
        if students.len() < MIN_COHORT_SIZE {
            return Err(ModerationError::InvalidInput(format!(
                "cohort needs at least {MIN_COHORT_SIZE} students, got {}",
                students.len()
            )));
        }
        Ok(Self { students })
    }

    pub fn from_scores(sac: &[Score], exam: &[Score]) -> Result<Self> {
        if sac.len() != exam.len() {
            return Err(ModerationError::InvalidInput(format!(
                "SAC and exam sequences differ in length ({} vs {})",
                sac.len(),
                exam.len()
            )));
        }
        let students = sac
            .iter()
            .zip(exam)
            .map(|(&s, &e)| Student::new(s, e))
            .collect();
        Self::new(students)
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn sac_scores(&self) -> Vec<Score> {
        self.students.iter().map(|s| s.sac).collect()
    }

    pub fn exam_scores(&self) -> Vec<Score> {
        self.students.iter().map(|s| s.exam).collect()
    }

    /// Moderated scores in student order. Students not yet moderated are
    /// skipped, so the result is only full-length after a moderation run.
    pub fn moderated_scores(&self) -> Vec<Score> {
        self.students.iter().filter_map(|s| s.moderated).collect()
    }

    pub fn display_name(&self, index: usize) -> String {
        match self.students.get(index).and_then(|s| s.name.as_deref()) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("student_{}", index + 1),
        }
    }

    pub(crate) fn with_moderated(&self, moderated: &[Score]) -> Self {
        let students = self
            .students
            .iter()
            .zip(moderated)
            .map(|(s, &m)| Student {
                moderated: Some(m),
                ..s.clone()
            })
            .collect();
        Self { students }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/cohort.rs"]
mod tests;
