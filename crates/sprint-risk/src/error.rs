use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Unknown risk: {0}")]
    UnknownRisk(String),

    #[error("Duplicate risk in catalog: {0}")]
    DuplicateRisk(String),

    #[error("Risk catalog has no entries")]
    EmptyCatalog,

    #[error("{field} must be between 1 and 5, got {value}")]
    RatingOutOfRange { field: &'static str, value: u8 },

    #[error("Sprint count must be a positive integer that fits in u32, got '{0}'")]
    InvalidSprintCount(String),

    #[error("Sampler drew {value} for {draw}, expected {expected}")]
    InvalidDraw {
        draw: &'static str,
        value: usize,
        expected: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SimResult<T> = Result<T, SimError>;
