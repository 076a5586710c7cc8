//! Error types for the zelect plugin.
//!
//! The controller itself is total: selecting, filtering and toggling never
//! fail. Errors only arise at the edges, when configuration is parsed, a theme
//! file is loaded, or an event names a choice that is not part of the set.

use thiserror::Error;

/// The main error type for zelect operations.
///
/// # Examples
///
/// ```
/// use zelect::domain::ZelectError;
///
/// let err = ZelectError::UnknownChoice("figma".to_string());
/// assert_eq!(err.to_string(), "Unknown choice: figma");
/// ```
#[derive(Debug, Error)]
pub enum ZelectError {
    /// Configuration is invalid or malformed.
    ///
    /// Raised while parsing the plugin configuration map, most commonly a
    /// `choices` value that is neither a JSON array nor a comma list.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// An event referenced a choice id that is not in the choice set.
    #[error("Unknown choice: {0}")]
    UnknownChoice(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for zelect operations.
pub type Result<T> = std::result::Result<T, ZelectError>;
