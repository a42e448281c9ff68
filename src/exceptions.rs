//! Error types for xamprofile

use std::fmt;

/// Main error type for profile store operations
#[derive(Debug)]
pub enum ProfileError {
    /// Type tag outside the platform's closed enumeration
    UnknownSettingType(u8),

    /// Fewer bytes than the fixed header size requires
    TruncatedHeader { expected: usize, actual: usize },

    /// Fewer bytes than a record (or its declared payload) requires
    TruncatedRecord { expected: usize, actual: usize },

    /// Raw payload handed to the record codec without going through the
    /// capped encode path
    PayloadTooLarge { size: usize, max: usize },

    /// IO error from a persistence backend
    IoError(std::io::Error),

    /// Generic error with message
    Generic(String),
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileError::UnknownSettingType(tag) => {
                write!(f, "Unknown setting type tag: {tag:#04x}")
            }
            ProfileError::TruncatedHeader { expected, actual } => {
                write!(f, "Truncated setting header: {actual} of {expected} bytes")
            }
            ProfileError::TruncatedRecord { expected, actual } => {
                write!(f, "Truncated setting record: {actual} of {expected} bytes")
            }
            ProfileError::PayloadTooLarge { size, max } => {
                write!(f, "Setting payload too large: {size} bytes exceeds cap of {max}")
            }
            ProfileError::IoError(err) => write!(f, "IO error: {err}"),
            ProfileError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ProfileError {}

impl From<std::io::Error> for ProfileError {
    fn from(err: std::io::Error) -> Self {
        ProfileError::IoError(err)
    }
}

/// Result type for profile store operations
pub type Result<T> = std::result::Result<T, ProfileError>;
