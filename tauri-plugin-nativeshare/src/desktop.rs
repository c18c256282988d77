use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use tauri::{plugin::PluginApi, AppHandle, Runtime};
use tracing::warn;

use crate::dispatcher::ShareDispatcher;
use crate::error::{Error, Result};
use crate::models::{ShareFileRequest, ShareIssued, ShareUrlRequest};

/// Initialize the desktop plugin. There is no share sheet to drive.
pub fn init<R: Runtime, C: DeserializeOwned>(
    _app: &AppHandle<R>,
    _api: PluginApi<R, C>,
) -> Result<NativeShare<R>> {
    Ok(NativeShare(PhantomData))
}

/// Access to the nativeshare APIs (desktop stub).
///
/// Requests are still validated so callers see the same validation errors
/// as on mobile; valid requests fail with [`Error::Unsupported`].
pub struct NativeShare<R: Runtime>(PhantomData<fn() -> R>);

impl<R: Runtime> ShareDispatcher for NativeShare<R> {
    fn share_url(&self, request: ShareUrlRequest) -> Result<ShareIssued> {
        warn!("Share sheet requested on desktop for {}", request.url());
        Err(Error::Unsupported)
    }

    fn share_file(&self, request: ShareFileRequest) -> Result<ShareIssued> {
        warn!(
            "Share sheet requested on desktop for {:?}",
            request.file_path
        );
        Err(Error::Unsupported)
    }
}
