use std::fmt::{self, Display};
use std::io;

/// Provides `SirError` and maps to other errors to
/// convert to an `SirError`
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub enum SirError {
    IoError(io::Error),
    JsonError(serde_json::Error),
    CSVError(csv::Error),
    /// The parameter set cannot be simulated: no steps were requested or the
    /// total population is not positive.
    InvalidParameters(String),
    SirError(String),
}

impl From<io::Error> for SirError {
    fn from(error: io::Error) -> Self {
        SirError::IoError(error)
    }
}

impl From<serde_json::Error> for SirError {
    fn from(error: serde_json::Error) -> Self {
        SirError::JsonError(error)
    }
}

impl From<csv::Error> for SirError {
    fn from(error: csv::Error) -> Self {
        SirError::CSVError(error)
    }
}

impl From<String> for SirError {
    fn from(error: String) -> Self {
        SirError::SirError(error)
    }
}

impl From<&str> for SirError {
    fn from(error: &str) -> Self {
        SirError::SirError(error.to_string())
    }
}

impl std::error::Error for SirError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SirError::IoError(error) => Some(error),
            SirError::JsonError(error) => Some(error),
            SirError::CSVError(error) => Some(error),
            SirError::InvalidParameters(_) | SirError::SirError(_) => None,
        }
    }
}

impl Display for SirError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SirError::IoError(error) => write!(f, "I/O error: {error}"),
            SirError::JsonError(error) => write!(f, "invalid JSON: {error}"),
            SirError::CSVError(error) => write!(f, "CSV error: {error}"),
            SirError::InvalidParameters(message) => {
                write!(f, "invalid simulation parameters: {message}")
            }
            SirError::SirError(message) => write!(f, "{message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_parameters_display() {
        let error = SirError::InvalidParameters("timesteps must be at least 1".to_string());
        assert_eq!(
            error.to_string(),
            "invalid simulation parameters: timesteps must be at least 1"
        );
    }

    #[test]
    fn from_str_and_string() {
        assert!(matches!(SirError::from("oops"), SirError::SirError(m) if m == "oops"));
        assert!(matches!(
            SirError::from("oops".to_string()),
            SirError::SirError(m) if m == "oops"
        ));
    }

    #[test]
    fn io_error_has_source() {
        use std::error::Error;
        let error: SirError = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(error.source().is_some());
        assert!(error.to_string().contains("missing"));
    }
}
