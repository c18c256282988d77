//! Named bridge calls (`Share.Url`, `Share.File`) and their result mapping.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::dispatcher::ShareDispatcher;
use crate::error::{Error, Result};
use crate::models::{BridgeParams, ShareFileRequest, ShareIssued, ShareUrlRequest};

pub const SHARE_URL: &str = "Share.Url";
pub const SHARE_FILE: &str = "Share.File";

/// What a bridge call returns: `{}` on success, `{"error": "..."}` otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BridgeResponse {
    pub fn success() -> Self {
        Self::default()
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

impl From<Result<ShareIssued>> for BridgeResponse {
    fn from(outcome: Result<ShareIssued>) -> Self {
        match outcome {
            Ok(ShareIssued) => Self::success(),
            Err(e) => Self::failure(e.to_string()),
        }
    }
}

/// Runs a named bridge function against `dispatcher`.
///
/// Parameters are converted to a typed request once, here. Nothing is
/// allowed to escape as an error: every failure ends up in the response.
pub fn execute<D>(dispatcher: &D, function: &str, params: &BridgeParams) -> BridgeResponse
where
    D: ShareDispatcher + ?Sized,
{
    let outcome = match function {
        SHARE_URL => ShareUrlRequest::from_params(params).and_then(|r| dispatcher.share_url(r)),
        SHARE_FILE => dispatcher.share_file(ShareFileRequest::from_params(params)),
        other => Err(Error::UnknownFunction(other.to_owned())),
    };

    if let Err(e) = &outcome {
        warn!("{} failed: {}", function, e);
    }
    outcome.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use std::sync::Mutex;

    #[derive(Default)]
    struct CountingDispatcher {
        urls: Mutex<Vec<ShareUrlRequest>>,
        files: Mutex<Vec<ShareFileRequest>>,
    }

    impl ShareDispatcher for CountingDispatcher {
        fn share_url(&self, request: ShareUrlRequest) -> Result<ShareIssued> {
            self.urls.lock().unwrap().push(request);
            Ok(ShareIssued)
        }

        fn share_file(&self, request: ShareFileRequest) -> Result<ShareIssued> {
            self.files.lock().unwrap().push(request);
            Ok(ShareIssued)
        }
    }

    fn params(value: Value) -> BridgeParams {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_missing_url_never_reaches_dispatcher() {
        let dispatcher = CountingDispatcher::default();

        for url in [json!(""), json!("   "), json!(null), json!(7)] {
            let response = execute(
                &dispatcher,
                SHARE_URL,
                &params(json!({ "title": "", "text": "", "url": url })),
            );
            assert_eq!(response, BridgeResponse::failure("URL parameter is required"));
        }

        assert!(dispatcher.urls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_share_url_success_is_empty_mapping() {
        let dispatcher = CountingDispatcher::default();

        let response = execute(
            &dispatcher,
            SHARE_URL,
            &params(json!({ "title": "Check this out", "url": "https://example.com" })),
        );

        assert!(response.is_success());
        assert_eq!(serde_json::to_value(&response).unwrap(), json!({}));
        let urls = dispatcher.urls.lock().unwrap();
        assert_eq!(urls.len(), 1);
        assert_eq!(urls[0].title(), "Check this out");
    }

    #[test]
    fn test_share_file_defaults_wrong_types() {
        let dispatcher = CountingDispatcher::default();

        let response = execute(
            &dispatcher,
            SHARE_FILE,
            &params(json!({ "title": ["x"], "message": "hi", "filePath": 3 })),
        );

        assert!(response.is_success());
        assert_eq!(
            dispatcher.files.lock().unwrap().as_slice(),
            &[ShareFileRequest::new("", "hi", None)]
        );
    }

    #[test]
    fn test_unknown_function() {
        let dispatcher = CountingDispatcher::default();

        let response = execute(&dispatcher, "Share.Image", &BridgeParams::new());

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "error": "Unknown bridge function: Share.Image" })
        );
    }

    #[test]
    fn test_dispatch_error_becomes_error_mapping() {
        struct Broken;

        impl ShareDispatcher for Broken {
            fn share_url(&self, _: ShareUrlRequest) -> Result<ShareIssued> {
                Err(Error::PlatformDispatch("launch failed".into()))
            }

            fn share_file(&self, _: ShareFileRequest) -> Result<ShareIssued> {
                Err(Error::Unsupported)
            }
        }

        let response = execute(&Broken, SHARE_URL, &params(json!({ "url": "https://a.b" })));
        assert_eq!(response, BridgeResponse::failure("launch failed"));

        let response = execute(&Broken, SHARE_FILE, &BridgeParams::new());
        assert_eq!(
            response,
            BridgeResponse::failure("Share sheet is not available on this platform")
        );
    }
}
