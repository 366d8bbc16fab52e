//! Global error handling for dirsnap
//!
//! This module provides a centralized error type that can represent errors
//! from all modules in the project.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::delivery::DeliveryError;

/// Global error type for dirsnap operations
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// A directory could not be enumerated
    #[error("Error accessing {}: {source}", .path.display())]
    Listing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A file could not be opened, read or decoded as text
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The finished document could not be handed to its sink
    #[error("Delivery error: {0}")]
    Delivery(#[from] DeliveryError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Path not found
    #[error("Path not found: {0}")]
    PathNotFound(String),
}

impl SnapshotError {
    /// Wrap a read failure with the path it happened on.
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Wrap a listing failure with the directory it happened on.
    pub fn listing(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Listing {
            path: path.into(),
            source,
        }
    }
}

/// Specialized Result type for dirsnap operations
pub type Result<T> = std::result::Result<T, SnapshotError>;

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error::SnapshotError::$error_type(format!($($arg)*)))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}

// main() speaks io::Result, like the rest of the binary plumbing
impl From<SnapshotError> for io::Error {
    fn from(err: SnapshotError) -> Self {
        let kind = match &err {
            SnapshotError::Listing { source, .. } | SnapshotError::Read { source, .. } => {
                source.kind()
            }
            SnapshotError::Delivery(DeliveryError::Io(e)) => e.kind(),
            SnapshotError::PathNotFound(_) => io::ErrorKind::NotFound,
            _ => io::ErrorKind::Other,
        };
        io::Error::new(kind, err.to_string())
    }
}
