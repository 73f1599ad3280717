//! Notifier error types.

use thiserror::Error;

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, NotifierError>;

/// Errors that can occur while generating notification XML.
#[derive(Error, Debug)]
pub enum NotifierError {
    /// The global config has no `[hipchat]` section or no `authtoken` key.
    #[error("Global config needs a [hipchat] section containing authtoken")]
    MissingAuthToken,

    /// The configured auth token is a blank string.
    #[error("HipChat authtoken must not be a blank string")]
    BlankAuthToken,

    /// The job fragment names neither `room` nor `rooms`.
    #[error("Must specify either 'room' or 'rooms' in hipchat config")]
    MissingRoom,

    /// IO errors from XML rendering.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// XML serialization errors.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),
}

impl NotifierError {
    /// Whether the error makes the whole generation run unusable, as
    /// opposed to a single malformed job definition.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::MissingAuthToken | Self::BlankAuthToken)
    }
}
