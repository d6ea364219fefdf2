use thiserror::Error;

/// A single problem with one paper record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaperProblem {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("year must be an integer, got {0}")]
    NonIntegerYear(String),

    #[error("year {0} is not a positive 4-digit integer")]
    YearOutOfRange(i64),

    #[error("paper URL must not be empty")]
    EmptyPaperUrl,

    #[error("field `{0}` must be a string")]
    NotAString(&'static str),
}

/// A catalogue that cannot be accepted as a whole.
///
/// Any one of these rejects the entire load; records are never dropped
/// individually.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid paper record {index} in {grade} / {subject}: {problem}")]
    InvalidPaper {
        grade: String,
        subject: String,
        index: usize,
        #[source]
        problem: PaperProblem,
    },

    #[error("duplicate grade: {name}")]
    DuplicateGrade { name: String },

    #[error("duplicate subject '{subject}' in grade '{grade}'")]
    DuplicateSubject { grade: String, subject: String },
}

pub type Result<T> = std::result::Result<T, ValidationError>;
