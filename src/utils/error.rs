use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("HTTP request to {url} returned status {status}")]
    HttpStatusError { url: String, status: u16 },

    #[error("Invalid CSS selector for {field} ({selector}): {message}")]
    SelectorError {
        field: String,
        selector: String,
        message: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Profile parsing error: {message}")]
    ProfileParseError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// Coarse failure kinds used for reporting and exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Parse,
    Io,
    Configuration,
}

impl ScrapeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ScrapeError::HttpError(_) | ScrapeError::HttpStatusError { .. } => {
                ErrorCategory::Network
            }
            ScrapeError::SelectorError { .. } | ScrapeError::ProfileParseError { .. } => {
                ErrorCategory::Parse
            }
            ScrapeError::IoError(_) | ScrapeError::SerializationError(_) => ErrorCategory::Io,
            ScrapeError::ConfigError { .. } | ScrapeError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    /// Process exit code for this failure. Success is always 0.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            ErrorCategory::Network => 2,
            ErrorCategory::Parse => 3,
            ErrorCategory::Io => 4,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ScrapeError::HttpError(e) => format!("Could not reach the webpage: {}", e),
            ScrapeError::HttpStatusError { url, status } => {
                format!("The webpage {} answered with HTTP {}", url, status)
            }
            ScrapeError::SelectorError {
                field, selector, ..
            } => format!("The {} selector '{}' is not valid CSS", field, selector),
            ScrapeError::IoError(e) => format!("Could not read or write a file: {}", e),
            ScrapeError::SerializationError(e) => {
                format!("Could not serialize the scraped products: {}", e)
            }
            ScrapeError::ProfileParseError { message } => {
                format!("The profile file could not be parsed: {}", message)
            }
            ScrapeError::ConfigError { message } => format!("Invalid configuration: {}", message),
            ScrapeError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid value for {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check the --url value and your network connection",
            ErrorCategory::Parse => "Check the CSS selectors and the profile file syntax",
            ErrorCategory::Io => "Check that the output directory exists and is writable",
            ErrorCategory::Configuration => "Run with --help to see the accepted options",
        }
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
