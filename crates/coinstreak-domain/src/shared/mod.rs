use serde::{Deserialize, Serialize};

mod date_range;
pub use date_range::DateRange;

/// Error codes for structured error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Resource Not Found (2xxx)
    SeedNotFound = 2001,

    // Data & Persistence (4xxx)
    SerializationError = 4004,
    DeserializationError = 4007,

    // Infrastructure (5xxx)
    InfrastructureError = 5001,

    // Validation (6xxx)
    ValidationError = 6001,
    InvalidInput = 6002,
    InvalidRange = 6004,
    EmptyMilestoneList = 6005,
    UnalignedSequence = 6006,
}

impl ErrorCode {
    /// Get error code as integer
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ErrorCode::SeedNotFound
            | ErrorCode::ValidationError
            | ErrorCode::InvalidInput => ErrorSeverity::Info,

            ErrorCode::InvalidRange
            | ErrorCode::EmptyMilestoneList
            | ErrorCode::DeserializationError => ErrorSeverity::Warning,

            ErrorCode::UnalignedSequence
            | ErrorCode::SerializationError
            | ErrorCode::InfrastructureError => ErrorSeverity::Error,
        }
    }

    /// Check if error is recoverable
    ///
    /// Precondition violations never are: the same inputs fail the same way.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ErrorCode::InfrastructureError | ErrorCode::SeedNotFound)
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Milestone list is empty")]
    EmptyMilestoneList,

    #[error("Day sequence of length {0} is not aligned to whole weeks")]
    UnalignedSequence(usize),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl DomainError {
    /// Get error code
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::InvalidRange(_) => ErrorCode::InvalidRange,
            DomainError::EmptyMilestoneList => ErrorCode::EmptyMilestoneList,
            DomainError::UnalignedSequence(_) => ErrorCode::UnalignedSequence,
            DomainError::Validation(_) => ErrorCode::ValidationError,
            DomainError::InvalidInput(_) => ErrorCode::InvalidInput,
            DomainError::NotFound(_) => ErrorCode::SeedNotFound,
            DomainError::Serialization(_) => ErrorCode::SerializationError,
            DomainError::Deserialization(_) => ErrorCode::DeserializationError,
            DomainError::Infrastructure(_) => ErrorCode::InfrastructureError,
        }
    }

    /// Get error message
    pub fn message(&self) -> String {
        match self {
            DomainError::InvalidRange(msg)
            | DomainError::Validation(msg)
            | DomainError::InvalidInput(msg)
            | DomainError::NotFound(msg)
            | DomainError::Serialization(msg)
            | DomainError::Deserialization(msg)
            | DomainError::Infrastructure(msg) => msg.clone(),
            DomainError::EmptyMilestoneList | DomainError::UnalignedSequence(_) => self.to_string(),
        }
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        self.code().severity()
    }

    /// Check if error is recoverable
    pub fn is_recoverable(&self) -> bool {
        self.code().is_recoverable()
    }

    /// Format error with code
    pub fn format_with_code(&self) -> String {
        format!("[{}] {}", self.code().code(), self)
    }
}
