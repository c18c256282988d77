//! Error types for the nativeshare plugin.

use serde::{Serialize, Serializer};

/// Result type alias for plugin operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to the caller of a share operation.
///
/// File-system problems while cleaning or filling the share cache are not
/// represented here: they are logged and the share proceeds.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required parameter was missing or empty.
    #[error("{0}")]
    Validation(String),

    /// The OS refused or failed while building or launching the share sheet.
    #[error("{0}")]
    PlatformDispatch(String),

    /// The bridge was asked for a function this plugin does not provide.
    #[error("Unknown bridge function: {0}")]
    UnknownFunction(String),

    /// No native share sheet exists on this platform.
    #[error("Share sheet is not available on this platform")]
    Unsupported,
}

impl Error {
    pub(crate) fn url_required() -> Self {
        Error::Validation("URL parameter is required".into())
    }
}

#[cfg(all(feature = "plugin", mobile))]
impl From<tauri::plugin::mobile::PluginInvokeError> for Error {
    fn from(err: tauri::plugin::mobile::PluginInvokeError) -> Self {
        Error::PlatformDispatch(err.to_string())
    }
}

impl Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_bare() {
        assert_eq!(Error::url_required().to_string(), "URL parameter is required");
    }

    #[test]
    fn test_error_serializes_as_string() {
        let json = serde_json::to_string(&Error::Unsupported).unwrap();
        assert_eq!(json, "\"Share sheet is not available on this platform\"");
    }
}
