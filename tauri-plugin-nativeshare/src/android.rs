//! Share dispatch for Android.
//!
//! Android takes a single `ACTION_SEND` intent with one MIME type, so every
//! request collapses into subject and text extras plus at most one stream.
//! The intent is fully decided here; the Kotlin side only copies the fields
//! onto an `Intent`, resolves the FileProvider URI and starts the chooser.

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::dispatcher::{non_empty, text_with_link, ShareDispatcher};
use crate::error::Result;
use crate::models::{FileTarget, ShareFileRequest, ShareIssued, ShareUrlRequest, SharedFile};
use crate::staging::FileStager;

pub const ACTION_SEND: &str = "android.intent.action.SEND";

/// Chooser title used when the request has none.
pub const DEFAULT_CHOOSER_TITLE: &str = "Share";

const TEXT_PLAIN: &str = "text/plain";

/// A prepared `ACTION_SEND` intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendIntent {
    pub action: String,
    pub mime_type: String,
    /// `EXTRA_SUBJECT`
    pub subject: Option<String>,
    /// `EXTRA_TEXT`
    pub text: Option<String>,
    /// `EXTRA_STREAM`
    pub stream: Option<StreamExtra>,
    pub chooser_title: String,
    /// Start the chooser with `FLAG_ACTIVITY_NEW_TASK`.
    pub new_task: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamExtra {
    pub file: SharedFile,
    /// FileProvider authority that turns the path into a `content://` URI.
    pub authority: String,
    /// Add `FLAG_GRANT_READ_URI_PERMISSION` for the receiving app.
    pub grant_read: bool,
}

/// Starts a chooser for a prepared intent.
pub trait IntentLauncher {
    /// Must return once the chooser has been started, without waiting for
    /// the user.
    fn start_chooser(&self, intent: SendIntent) -> Result<()>;
}

pub struct AndroidDispatcher<L> {
    launcher: L,
    stager: FileStager,
    authority: String,
    chooser_title: String,
}

impl<L: IntentLauncher> AndroidDispatcher<L> {
    pub fn new(launcher: L, stager: FileStager, authority: impl Into<String>) -> Self {
        Self {
            launcher,
            stager,
            authority: authority.into(),
            chooser_title: DEFAULT_CHOOSER_TITLE.to_owned(),
        }
    }

    pub fn with_chooser_title(mut self, title: impl Into<String>) -> Self {
        self.chooser_title = title.into();
        self
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    fn chooser_title(&self, title: &str) -> String {
        non_empty(title).unwrap_or_else(|| self.chooser_title.clone())
    }

    fn text_intent(&self, title: &str, text: String) -> SendIntent {
        SendIntent {
            action: ACTION_SEND.to_owned(),
            mime_type: TEXT_PLAIN.to_owned(),
            subject: non_empty(title),
            text: Some(text),
            stream: None,
            chooser_title: self.chooser_title(title),
            new_task: true,
        }
    }

    fn launch(&self, intent: SendIntent) -> Result<ShareIssued> {
        let mime_type = intent.mime_type.clone();
        if let Err(e) = self.launcher.start_chooser(intent) {
            error!("Error launching share sheet: {}", e);
            return Err(e);
        }
        info!("Share sheet opened ({})", mime_type);
        Ok(ShareIssued)
    }
}

impl<L: IntentLauncher> ShareDispatcher for AndroidDispatcher<L> {
    fn share_url(&self, request: ShareUrlRequest) -> Result<ShareIssued> {
        debug!(
            "Share URL requested - title: {}, url: {}",
            request.title(),
            request.url()
        );
        let text = text_with_link(request.text(), request.url());
        self.launch(self.text_intent(request.title(), text))
    }

    fn share_file(&self, request: ShareFileRequest) -> Result<ShareIssued> {
        debug!(
            "Share requested - title: {}, message: {}, filePath: {:?}",
            request.title, request.message, request.file_path
        );

        let intent = match FileTarget::classify(request.file_path.as_deref()) {
            FileTarget::Absent => self.text_intent(&request.title, request.message.clone()),
            FileTarget::Remote(link) => {
                self.text_intent(&request.title, text_with_link(&request.message, &link))
            }
            FileTarget::Missing(path) => {
                debug!("File not found at path: {}", path);
                self.text_intent(&request.title, text_with_link(&request.message, &path))
            }
            FileTarget::Local(path) => match self.stager.prepare(&path) {
                Some(file) => {
                    debug!("Sharing file: {} ({})", file.path.display(), file.mime_type);
                    SendIntent {
                        action: ACTION_SEND.to_owned(),
                        mime_type: file.mime_type.clone(),
                        subject: non_empty(&request.title),
                        text: non_empty(&request.message),
                        stream: Some(StreamExtra {
                            file,
                            authority: self.authority.clone(),
                            grant_read: true,
                        }),
                        chooser_title: self.chooser_title(&request.title),
                        new_task: true,
                    }
                }
                None => self.text_intent(
                    &request.title,
                    text_with_link(&request.message, &path.to_string_lossy()),
                ),
            },
        };

        self.launch(intent)
    }
}
