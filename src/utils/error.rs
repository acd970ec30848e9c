use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContactBookError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("{method} {url} returned status {status}")]
    HttpStatusError {
        method: String,
        url: String,
        status: u16,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Remote,
    Io,
    Data,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ContactBookError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ApiError(_) => ErrorCategory::Network,
            Self::HttpStatusError { .. } => ErrorCategory::Remote,
            Self::IoError(_) => ErrorCategory::Io,
            Self::SerializationError(_) => ErrorCategory::Data,
            Self::InvalidConfigValueError { .. } | Self::ConfigValidationError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // A missing contact is reported but is not a failure of the tool.
            Self::HttpStatusError { status: 404, .. } => ErrorSeverity::Low,
            Self::ApiError(_) | Self::HttpStatusError { .. } => ErrorSeverity::Medium,
            Self::SerializationError(_) => ErrorSeverity::High,
            Self::IoError(_) => ErrorSeverity::Critical,
            Self::InvalidConfigValueError { .. } | Self::ConfigValidationError { .. } => {
                ErrorSeverity::High
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::ApiError(e) if e.is_timeout() => {
                "The contacts API did not answer in time; raise --timeout-seconds or check the server".to_string()
            }
            Self::ApiError(_) => {
                "Check that the contacts API is running and --base-url points at it".to_string()
            }
            Self::HttpStatusError { status: 404, .. } => {
                "No contact with that id; run `contact-book list` to see existing ids".to_string()
            }
            Self::HttpStatusError { status, .. } if *status >= 500 => {
                "The contacts API failed internally; try again later".to_string()
            }
            Self::HttpStatusError { .. } => {
                "The contacts API rejected the request; check the submitted fields".to_string()
            }
            Self::IoError(_) => "Check file permissions and that the path exists".to_string(),
            Self::SerializationError(_) => {
                "The API answered with unexpected JSON; check the API version".to_string()
            }
            Self::ConfigValidationError { .. } => {
                "Review the configuration file syntax".to_string()
            }
            Self::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}'", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ApiError(_) => "Could not reach the contacts API".to_string(),
            Self::HttpStatusError { status: 404, .. } => "Contact not found".to_string(),
            Self::HttpStatusError { method, status, .. } => {
                format!("The contacts API refused the {} request ({})", method, status)
            }
            Self::IoError(e) => format!("File error: {}", e),
            Self::SerializationError(_) => "Could not read the API response".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ContactBookError>;
