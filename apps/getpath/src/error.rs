//! CLI error handling

use std::fmt;

use getpath_errors::UserFacingError;

/// CLI-specific error type
#[derive(Debug)]
pub enum CliError {
    /// Build defaults could not be used
    Config(getpath_errors::ConfigError),
    /// The computation failed
    Discovery(getpath_errors::Error),
    /// I/O error while writing output
    Io(std::io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(e) => {
                write!(f, "Configuration error: {}", e.user_message())?;
                if let Some(hint) = e.user_hint() {
                    write!(f, "\n  Hint: {hint}")?;
                }
                Ok(())
            }
            CliError::Discovery(e) => {
                let message = e.user_message();
                write!(f, "{message}")?;
                if let Some(code) = e.user_code() {
                    write!(f, "\n  Code: {code}")?;
                }
                if let Some(hint) = e.user_hint() {
                    write!(f, "\n  Hint: {hint}")?;
                }
                if e.is_retryable() {
                    write!(f, "\n  Retry: safe to retry this operation.")?;
                }
                Ok(())
            }
            CliError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Discovery(e) => Some(e),
            CliError::Io(e) => Some(e),
        }
    }
}

impl From<getpath_errors::ConfigError> for CliError {
    fn from(e: getpath_errors::ConfigError) -> Self {
        CliError::Config(e)
    }
}

impl From<getpath_errors::Error> for CliError {
    fn from(e: getpath_errors::Error) -> Self {
        match e {
            getpath_errors::Error::Config(config) => CliError::Config(config),
            other => CliError::Discovery(other),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}
