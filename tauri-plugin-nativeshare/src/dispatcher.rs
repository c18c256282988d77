//! The interface both platform dispatchers implement.

use crate::error::Result;
use crate::models::{ShareFileRequest, ShareIssued, ShareUrlRequest};

/// Hands content to the platform share sheet.
///
/// Both operations return as soon as the OS has been asked to show the
/// sheet. The sheet itself is presented asynchronously and its outcome
/// (target picked, cancelled, delivered) is never reported back, so a
/// returned [`ShareIssued`] is not a delivery confirmation.
///
/// Errors from the platform are returned as
/// [`Error::PlatformDispatch`](crate::Error::PlatformDispatch); callers on
/// the bridge receive them as an error mapping rather than a panic.
pub trait ShareDispatcher {
    /// `Share.Url`: shares a link, optionally with a subject and message.
    fn share_url(&self, request: ShareUrlRequest) -> Result<ShareIssued>;

    /// `Share.File`: shares a local file, a remote URL or plain text.
    fn share_file(&self, request: ShareFileRequest) -> Result<ShareIssued>;
}

/// Joins an optional message and a link with a blank line.
pub(crate) fn text_with_link(message: &str, link: &str) -> String {
    if message.is_empty() {
        link.to_owned()
    } else {
        format!("{message}\n\n{link}")
    }
}

/// `Some(value)` unless `value` is empty.
pub(crate) fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_with_link() {
        assert_eq!(text_with_link("", "https://a.b"), "https://a.b");
        assert_eq!(text_with_link("Look", "https://a.b"), "Look\n\nhttps://a.b");
    }
}
