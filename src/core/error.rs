//! Error types for the stores and their persistence

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Kind of entry an operation addressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Language,
    Category,
    Command,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Language => "language",
            Self::Category => "category",
            Self::Command => "command",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{kind} '{name}' not found")]
    NotFound { kind: EntryKind, name: String },
    #[error("{0} must not be empty")]
    EmptyInput(&'static str),
    #[error("there is no {0} to select")]
    NothingToSelect(EntryKind),
    #[error("I/O error while {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub fn not_found(kind: EntryKind, name: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            name: name.into(),
        }
    }

    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Whether the error came from a rejected request rather than the filesystem
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::EmptyInput(_) | Self::NothingToSelect(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = StoreError::not_found(EntryKind::Command, "run");
        assert_eq!(err.to_string(), "command 'run' not found");
        assert!(err.is_user_facing());
    }

    #[test]
    fn test_io_is_not_user_facing() {
        let err = StoreError::io(
            "writing data_file",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(!err.is_user_facing());
        assert!(err.to_string().starts_with("I/O error while writing data_file"));
    }
}
