//! Mobile wiring: the platform dispatcher chosen at build time, driving the
//! native plugin through its `PluginHandle`.

use serde::de::DeserializeOwned;
use tauri::{
    plugin::{PluginApi, PluginHandle},
    AppHandle, Manager, Runtime,
};

use crate::config::Config;
use crate::dispatcher::ShareDispatcher;
use crate::error::{Error, Result};
use crate::models::{ShareFileRequest, ShareIssued, ShareUrlRequest};

#[cfg(target_os = "android")]
use crate::android::{AndroidDispatcher, IntentLauncher, SendIntent};
#[cfg(target_os = "ios")]
use crate::ios::{ActivityPresenter, ActivitySheet, IosDispatcher};

#[cfg(target_os = "ios")]
tauri::ios_plugin_binding!(init_plugin_nativeshare);

#[cfg(target_os = "android")]
type PlatformDispatcher<R> = AndroidDispatcher<PluginSurface<R>>;
#[cfg(target_os = "ios")]
type PlatformDispatcher<R> = IosDispatcher<PluginSurface<R>>;

/// Initialize the mobile plugin by registering with the native layer.
pub fn init<R: Runtime, C: DeserializeOwned>(
    app: &AppHandle<R>,
    api: PluginApi<R, C>,
    config: Config,
) -> Result<NativeShare<R>> {
    let cache_root = app.path().app_cache_dir().map_err(|e| {
        Error::PlatformDispatch(format!("Could not determine cache directory: {}", e))
    })?;
    let stager = config.stager(&cache_root);

    #[cfg(target_os = "android")]
    let dispatcher = {
        let handle =
            api.register_android_plugin("app.tauri.nativeshare", "NativeSharePlugin")?;
        let authority = config.file_provider_authority(&app.config().identifier);
        AndroidDispatcher::new(PluginSurface(handle), stager, authority)
            .with_chooser_title(config.chooser_title.clone())
    };
    #[cfg(target_os = "ios")]
    let dispatcher = {
        let handle = api.register_ios_plugin(init_plugin_nativeshare)?;
        IosDispatcher::new(PluginSurface(handle), stager)
    };

    Ok(NativeShare(dispatcher))
}

/// Forwards prepared payloads to the native plugin.
pub struct PluginSurface<R: Runtime>(PluginHandle<R>);

#[cfg(target_os = "android")]
impl<R: Runtime> IntentLauncher for PluginSurface<R> {
    fn start_chooser(&self, intent: SendIntent) -> Result<()> {
        // Kotlin resolves with `{}` right after startActivity
        self.0
            .run_mobile_plugin::<serde_json::Value>("startChooser", intent)
            .map(|_| ())
            .map_err(Into::into)
    }
}

#[cfg(target_os = "ios")]
impl<R: Runtime> ActivityPresenter for PluginSurface<R> {
    fn present(&self, sheet: ActivitySheet) -> Result<()> {
        // Swift resolves before the main-queue presentation runs
        self.0
            .run_mobile_plugin::<serde_json::Value>("presentActivitySheet", sheet)
            .map(|_| ())
            .map_err(Into::into)
    }
}

/// Access to the nativeshare mobile APIs.
pub struct NativeShare<R: Runtime>(PlatformDispatcher<R>);

impl<R: Runtime> ShareDispatcher for NativeShare<R> {
    fn share_url(&self, request: ShareUrlRequest) -> Result<ShareIssued> {
        self.0.share_url(request)
    }

    fn share_file(&self, request: ShareFileRequest) -> Result<ShareIssued> {
        self.0.share_file(request)
    }
}
