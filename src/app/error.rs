use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DigestError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk input directory: {0}")]
    Walk(#[from] ignore::Error),

    #[error("Invalid glob pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}

impl DigestError {
    pub fn config(message: impl Into<String>) -> Self {
        DigestError::Config {
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DigestError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, DigestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = DigestError::config("input directory does not exist: /nope");
        assert_eq!(
            err.to_string(),
            "Configuration error: input directory does not exist: /nope"
        );
    }

    #[test]
    fn test_io_error_display() {
        let err = DigestError::io(
            "/out/digest.md",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "I/O error on /out/digest.md: denied");
    }

    #[test]
    fn test_pattern_error_display() {
        let source = globset::Glob::new("[abc").unwrap_err();
        let err = DigestError::Pattern {
            pattern: "[abc".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("Invalid glob pattern '[abc'"));
    }
}
