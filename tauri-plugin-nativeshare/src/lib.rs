//! Native share sheet for Tauri mobile apps.
//!
//! Requests arrive as named bridge calls (`Share.Url`, `Share.File`) with
//! loosely-typed parameters. They are turned into typed requests once, then
//! handed to the dispatcher for the target platform:
//! - **Android**: one `ACTION_SEND` intent in a chooser ([`android`])
//! - **iOS**: a `UIActivityViewController` item list ([`ios`])
//!
//! A successful call means the share sheet was requested, not that anything
//! was shared. The OS never reports back what the user did.
//!
//! # Native side
//!
//! The renderers ship in `android/` and `ios/` and only copy prepared
//! payloads onto platform objects:
//!
//! - **Android**: `app.tauri.nativeshare.NativeSharePlugin`, command
//!   `startChooser`, payload [`android::SendIntent`]:
//!
//!   ```json
//!   { "action": "android.intent.action.SEND", "mimeType": "image/png",
//!     "subject": null, "text": "hi",
//!     "stream": { "file": { "path": "/…/cache/share/a.png", "mimeType": "image/png" },
//!                 "authority": "com.example.app.fileprovider", "grantRead": true },
//!     "chooserTitle": "Share", "newTask": true }
//!   ```
//!
//!   The library manifest declares a `FileProvider` with authority
//!   `${applicationId}.fileprovider`. An app that already declares one under
//!   that authority should set `fileProviderAuthority` to its own and expose
//!   the `share/` cache directory in its paths file.
//! - **iOS**: `NativeSharePlugin` bound as `init_plugin_nativeshare`, command
//!   `presentActivitySheet`, payload [`ios::ActivitySheet`]:
//!
//!   ```json
//!   { "items": [ { "type": "url", "value": "https://example.com/" },
//!                { "type": "file", "value": { "path": "/…/a.pdf", "mimeType": "application/pdf" } },
//!                { "type": "text", "value": "See attached" } ],
//!     "popover": "rootViewCenter", "animated": true }
//!   ```
//!
//! Both resolve with `{}` once the sheet is launched or queued, and reject
//! with a message when the platform refuses.

#[cfg(feature = "plugin")]
use tauri::{
    plugin::{Builder, TauriPlugin},
    Manager, Runtime,
};

pub mod android;
pub mod bridge;
pub mod cache;
pub mod ios;
pub mod mime;
pub mod staging;

mod config;
mod dispatcher;
mod error;
mod models;

#[cfg(feature = "plugin")]
mod commands;
#[cfg(all(feature = "plugin", desktop))]
mod desktop;
#[cfg(all(feature = "plugin", mobile))]
mod mobile;

pub use bridge::{execute, BridgeResponse};
pub use config::Config;
pub use dispatcher::ShareDispatcher;
pub use error::{Error, Result};
pub use models::*;

#[cfg(all(feature = "plugin", desktop))]
pub use desktop::NativeShare;
#[cfg(all(feature = "plugin", mobile))]
pub use mobile::NativeShare;

/// Extensions to [`tauri::App`], [`tauri::AppHandle`] and [`tauri::Window`] to access the nativeshare APIs.
#[cfg(feature = "plugin")]
pub trait NativeShareExt<R: Runtime> {
    fn native_share(&self) -> &NativeShare<R>;
}

#[cfg(feature = "plugin")]
impl<R: Runtime, T: Manager<R>> crate::NativeShareExt<R> for T {
    fn native_share(&self) -> &NativeShare<R> {
        self.state::<NativeShare<R>>().inner()
    }
}

/// Initializes the nativeshare plugin.
///
/// Optional settings are read from `plugins.nativeshare` in
/// `tauri.conf.json`; see [`Config`].
#[cfg(feature = "plugin")]
pub fn init<R: Runtime>() -> TauriPlugin<R, Option<Config>> {
    Builder::<R, Option<Config>>::new("nativeshare")
        .invoke_handler(tauri::generate_handler![
            commands::share_url,
            commands::share_file,
            commands::call,
        ])
        .setup(|app, api| {
            #[cfg(mobile)]
            let native_share = {
                let config = api.config().clone().unwrap_or_default();
                mobile::init(app, api, config)?
            };
            #[cfg(desktop)]
            let native_share = desktop::init(app, api)?;
            app.manage(native_share);
            Ok(())
        })
        .build()
}
