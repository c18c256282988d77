//! Share dispatch for iOS.
//!
//! `UIActivityViewController` accepts an ordered list of mixed items, so
//! requests become a list of URL, file and text items. The Swift side looks
//! up the key window's root view controller on the main queue and presents
//! the sheet from it.

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};
use url::Url;

use crate::dispatcher::{text_with_link, ShareDispatcher};
use crate::error::Result;
use crate::models::{ContentItem, FileTarget, ShareFileRequest, ShareIssued, ShareUrlRequest};
use crate::staging::FileStager;

/// A prepared activity sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySheet {
    pub items: Vec<ContentItem>,
    pub popover: PopoverAnchor,
    pub animated: bool,
}

/// Where the popover points on iPad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PopoverAnchor {
    /// Zero-sized rect at the centre of the root view, any arrow direction.
    RootViewCenter,
}

/// Presents a prepared sheet.
pub trait ActivityPresenter {
    /// Must schedule the presentation and return without waiting for it.
    fn present(&self, sheet: ActivitySheet) -> Result<()>;
}

pub struct IosDispatcher<P> {
    presenter: P,
    stager: FileStager,
}

impl<P: ActivityPresenter> IosDispatcher<P> {
    pub fn new(presenter: P, stager: FileStager) -> Self {
        Self { presenter, stager }
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    fn present(&self, items: Vec<ContentItem>) -> Result<ShareIssued> {
        debug!("Sharing {} item(s)", items.len());
        let sheet = ActivitySheet {
            items,
            popover: PopoverAnchor::RootViewCenter,
            animated: true,
        };
        if let Err(e) = self.presenter.present(sheet) {
            error!("Error presenting share sheet: {}", e);
            return Err(e);
        }
        info!("Share sheet presentation scheduled");
        Ok(ShareIssued)
    }
}

/// A URL item when the string parses as an absolute URL, text otherwise.
fn link_item(value: &str) -> ContentItem {
    match Url::parse(value) {
        Ok(url) => ContentItem::Url(url),
        Err(_) => ContentItem::Text(value.to_owned()),
    }
}

fn push_text(items: &mut Vec<ContentItem>, value: &str) {
    if !value.is_empty() {
        items.push(ContentItem::Text(value.to_owned()));
    }
}

impl<P: ActivityPresenter> ShareDispatcher for IosDispatcher<P> {
    fn share_url(&self, request: ShareUrlRequest) -> Result<ShareIssued> {
        debug!(
            "Share URL requested - title: '{}', url: '{}'",
            request.title(),
            request.url()
        );
        let mut items = vec![link_item(request.url())];
        push_text(&mut items, request.title());
        push_text(&mut items, request.text());
        self.present(items)
    }

    fn share_file(&self, request: ShareFileRequest) -> Result<ShareIssued> {
        debug!(
            "Share requested - title: '{}', message: '{}', filePath: {:?}",
            request.title, request.message, request.file_path
        );

        let mut items = Vec::new();
        let mut message_in_body = false;
        match FileTarget::classify(request.file_path.as_deref()) {
            FileTarget::Absent => {}
            FileTarget::Remote(link) => items.push(link_item(&link)),
            FileTarget::Local(path) => match self.stager.prepare(&path) {
                Some(file) => {
                    debug!("Added file to share items: {}", file.path.display());
                    items.push(ContentItem::File(file));
                }
                None => {
                    let body = text_with_link(&request.message, &path.to_string_lossy());
                    items.push(ContentItem::Text(body));
                    message_in_body = true;
                }
            },
            FileTarget::Missing(path) => {
                debug!("File not found at path: {}", path);
                items.push(ContentItem::Text(text_with_link(&request.message, &path)));
                message_in_body = true;
            }
        }

        push_text(&mut items, &request.title);
        if !message_in_body {
            push_text(&mut items, &request.message);
        }
        if items.is_empty() {
            items.push(ContentItem::Text(String::new()));
        }

        self.present(items)
    }
}
