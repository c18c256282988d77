//! Data types for the nativeshare plugin.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::Url;

use crate::error::{Error, Result};

/// Parameters as they arrive over the bridge: any value under a string key.
pub type BridgeParams = Map<String, Value>;

/// Reads a string parameter. Absent or non-string values become `""`.
fn string_param(params: &BridgeParams, key: &str) -> String {
    match params.get(key) {
        Some(Value::String(value)) => value.clone(),
        _ => String::new(),
    }
}

/// A `Share.Url` request. Holding one means the URL is non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareUrlRequest {
    title: String,
    text: String,
    url: String,
}

impl ShareUrlRequest {
    pub fn new(
        title: impl Into<String>,
        text: impl Into<String>,
        url: impl Into<String>,
    ) -> Result<Self> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(Error::url_required());
        }
        Ok(Self {
            title: title.into(),
            text: text.into(),
            url,
        })
    }

    /// Reads `title`, `text` and `url` from bridge parameters.
    pub fn from_params(params: &BridgeParams) -> Result<Self> {
        Self::new(
            string_param(params, "title"),
            string_param(params, "text"),
            string_param(params, "url"),
        )
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// A `Share.File` request.
///
/// Every field may be empty: a request without a file is a plain text
/// share, and a path that does not exist degrades to sharing the path
/// itself as text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareFileRequest {
    pub title: String,
    pub message: String,
    /// `None` when the caller sent no path or an empty one.
    pub file_path: Option<String>,
}

impl ShareFileRequest {
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        file_path: Option<String>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            file_path: file_path.filter(|path| !path.is_empty()),
        }
    }

    /// Reads `title`, `message` and `filePath` from bridge parameters.
    pub fn from_params(params: &BridgeParams) -> Self {
        Self::new(
            string_param(params, "title"),
            string_param(params, "message"),
            Some(string_param(params, "filePath")),
        )
    }
}

/// What `filePath` turned out to point at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileTarget {
    /// No path given.
    Absent,
    /// An `http`, `https` or `ftp` URL.
    Remote(String),
    /// A local file that exists.
    Local(PathBuf),
    /// A local path with nothing behind it.
    Missing(String),
}

impl FileTarget {
    /// Classifies a path. The only I/O performed is the existence check.
    pub fn classify(file_path: Option<&str>) -> Self {
        match file_path {
            None | Some("") => FileTarget::Absent,
            Some(path) if is_remote_url(path) => FileTarget::Remote(path.to_owned()),
            Some(path) => {
                let local = PathBuf::from(path);
                if local.is_file() {
                    FileTarget::Local(local)
                } else {
                    FileTarget::Missing(path.to_owned())
                }
            }
        }
    }
}

/// Case-insensitive scheme check for the URLs a file share passes through.
pub fn is_remote_url(value: &str) -> bool {
    const SCHEMES: [&str; 3] = ["http://", "https://", "ftp://"];
    SCHEMES.iter().any(|scheme| {
        value
            .get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

/// A file handed to the share sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedFile {
    pub path: PathBuf,
    pub mime_type: String,
}

/// One unit of shareable data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum ContentItem {
    Url(Url),
    File(SharedFile),
    Text(String),
}

/// Returned once the platform share surface has been asked to open.
///
/// The sheet is presented asynchronously by the OS and the plugin never
/// learns what the user picked or whether they cancelled. There is no
/// completion to wait for.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShareIssued;
