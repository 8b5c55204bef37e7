use thiserror::Error;

#[derive(Error, Debug)]
pub enum CourseError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Course file parsing error: {message}")]
    ParseError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown output format: {value}")]
    UnknownFormat { value: String },
}

impl CourseError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            CourseError::IoError(e) => format!("Could not read or write a file: {}", e),
            CourseError::SerializationError(e) => format!("Could not serialize the page: {}", e),
            CourseError::ParseError { message } => format!("The course file is invalid: {}", message),
            CourseError::ValidationError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            CourseError::UnknownFormat { value } => format!("'{}' is not a supported format", value),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CourseError::IoError(_) => "Check that the path exists and is readable/writable",
            CourseError::SerializationError(_) => "Try another output format such as --format text",
            CourseError::ParseError { .. } => {
                "Make sure the file is valid TOML with a `name` and `[[parts]]` entries whose `exercises` are non-negative integers"
            }
            CourseError::ValidationError { .. } => "Fix the reported setting and run again",
            CourseError::UnknownFormat { .. } => "Use one of: html, text, json",
        }
    }
}

pub type Result<T> = std::result::Result<T, CourseError>;
