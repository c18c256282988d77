//! Tauri command handlers for the nativeshare plugin.
//!
//! Every command resolves to a [`BridgeResponse`]; share failures are
//! reported inside it rather than as a rejected promise.

use tauri::{command, AppHandle, Runtime};

use crate::bridge::{self, BridgeResponse, SHARE_FILE, SHARE_URL};
use crate::models::BridgeParams;
use crate::NativeShareExt;
use crate::Result;

/// `Share.Url`: `title?`, `text?`, `url`.
#[command]
pub(crate) async fn share_url<R: Runtime>(
    app: AppHandle<R>,
    params: Option<BridgeParams>,
) -> Result<BridgeResponse> {
    Ok(bridge::execute(
        app.native_share(),
        SHARE_URL,
        &params.unwrap_or_default(),
    ))
}

/// `Share.File`: `title?`, `message?`, `filePath?`.
#[command]
pub(crate) async fn share_file<R: Runtime>(
    app: AppHandle<R>,
    params: Option<BridgeParams>,
) -> Result<BridgeResponse> {
    Ok(bridge::execute(
        app.native_share(),
        SHARE_FILE,
        &params.unwrap_or_default(),
    ))
}

/// Generic bridge entry: a function name such as `Share.Url` plus its
/// parameters.
#[command]
pub(crate) async fn call<R: Runtime>(
    app: AppHandle<R>,
    function: String,
    params: Option<BridgeParams>,
) -> Result<BridgeResponse> {
    Ok(bridge::execute(
        app.native_share(),
        &function,
        &params.unwrap_or_default(),
    ))
}
