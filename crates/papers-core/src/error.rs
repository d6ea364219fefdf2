use thiserror::Error;

/// A rejected control or configuration value. The previous state is kept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown view mode '{value}' (expected grid, card, compact, or list)")]
    InvalidViewMode { value: String },

    #[error("malformed quick filter token '{token}'")]
    InvalidFilterToken { token: String },

    #[error("unknown filter field '{name}' (expected grade, subject, or year)")]
    UnknownFilterField { name: String },

    #[error("no grade section at index {grade}")]
    UnknownGrade { grade: usize },

    #[error("no subject group at index {subject} in grade section {grade}")]
    UnknownSubject { grade: usize, subject: usize },

    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
