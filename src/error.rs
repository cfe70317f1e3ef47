use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModerationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("score {value} outside mapping range [{min}, {max}]")]
    OutOfRange { value: f64, min: f64, max: f64 },
    #[error("zero-width mapping range [{min}, {max}]")]
    DegenerateRange { min: f64, max: f64 },
    #[error("student {index} with SAC score {score} matched no anchor or segment")]
    UnclassifiedScore { index: usize, score: u32 },
}

pub type Result<T> = std::result::Result<T, ModerationError>;
