//! Plugin configuration, read from `plugins.nativeshare` in `tauri.conf.json`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::android::DEFAULT_CHOOSER_TITLE;
use crate::cache::{ShareCache, DEFAULT_MAX_AGE};
use crate::staging::{FileStager, SandboxPolicy};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Subdirectory of the app cache dir that holds shared copies.
    pub cache_dir_name: String,
    pub max_cache_age_secs: u64,
    /// Path components that mark app-private storage.
    pub sandbox_markers: Vec<String>,
    /// Absolute prefixes of app-private storage.
    pub sandbox_roots: Vec<PathBuf>,
    /// Defaults to `<identifier>.fileprovider`.
    pub file_provider_authority: Option<String>,
    /// Chooser title when the request has none (Android).
    pub chooser_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_dir_name: "share".to_owned(),
            max_cache_age_secs: DEFAULT_MAX_AGE.as_secs(),
            sandbox_markers: vec!["app_storage".to_owned()],
            sandbox_roots: Vec::new(),
            file_provider_authority: None,
            chooser_title: DEFAULT_CHOOSER_TITLE.to_owned(),
        }
    }
}

impl Config {
    pub fn max_cache_age(&self) -> Duration {
        Duration::from_secs(self.max_cache_age_secs)
    }

    pub fn share_cache(&self, cache_root: &Path) -> ShareCache {
        ShareCache::new(cache_root.join(&self.cache_dir_name), self.max_cache_age())
    }

    pub fn sandbox_policy(&self) -> SandboxPolicy {
        SandboxPolicy::new(self.sandbox_markers.clone(), self.sandbox_roots.clone())
    }

    pub fn stager(&self, cache_root: &Path) -> FileStager {
        FileStager::new(self.share_cache(cache_root), self.sandbox_policy())
    }

    pub fn file_provider_authority(&self, identifier: &str) -> String {
        self.file_provider_authority
            .clone()
            .unwrap_or_else(|| format!("{identifier}.fileprovider"))
    }
}
