//! Turning a local path into something another app can open.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, warn};

use crate::cache::ShareCache;
use crate::mime::infer_type_for_path;
use crate::models::SharedFile;

/// Decides which paths live in storage other apps cannot read.
#[derive(Debug, Clone, Default)]
pub struct SandboxPolicy {
    /// Directory names that mark private storage wherever they appear.
    markers: Vec<String>,
    /// Absolute prefixes of private storage.
    roots: Vec<PathBuf>,
}

impl SandboxPolicy {
    pub fn new(markers: Vec<String>, roots: Vec<PathBuf>) -> Self {
        Self { markers, roots }
    }

    pub fn contains(&self, path: &Path) -> bool {
        if self.roots.iter().any(|root| path.starts_with(root)) {
            return true;
        }
        path.components().any(|component| match component {
            Component::Normal(name) => self.markers.iter().any(|marker| name == marker.as_str()),
            _ => false,
        })
    }
}

/// Prepares existing local files for sharing.
#[derive(Debug, Clone)]
pub struct FileStager {
    cache: ShareCache,
    sandbox: SandboxPolicy,
}

impl FileStager {
    pub fn new(cache: ShareCache, sandbox: SandboxPolicy) -> Self {
        Self { cache, sandbox }
    }

    pub fn cache(&self) -> &ShareCache {
        &self.cache
    }

    /// Evicts stale cache entries, copies the file into the share cache when
    /// it sits in sandboxed storage, and infers its MIME type.
    ///
    /// Returns `None` when the file is gone after eviction, which happens
    /// when the caller shares a stale copy from the cache itself. A failed
    /// copy is logged and the original path is shared instead. The copy is
    /// named after `path` as given, not after what it resolves to.
    pub fn prepare(&self, path: &Path) -> Option<SharedFile> {
        self.cache.evict_stale();
        if !path.is_file() {
            debug!("{} no longer exists after cache eviction", path.display());
            return None;
        }

        let resolved = fs::canonicalize(path).unwrap_or_else(|e| {
            warn!("Could not resolve {}: {}", path.display(), e);
            path.to_path_buf()
        });

        let shared_path = if self.sandbox.contains(&resolved) {
            let staged = match path.file_name() {
                Some(name) => self.cache.stage(&resolved, name),
                None => Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "path has no file name",
                )),
            };
            match staged {
                Ok(copy) => {
                    debug!("Copied {} into share cache", resolved.display());
                    copy
                }
                Err(e) => {
                    warn!(
                        "Could not copy {} into share cache, sharing original: {}",
                        resolved.display(),
                        e
                    );
                    resolved
                }
            }
        } else {
            resolved
        };

        Some(SharedFile {
            path: shared_path,
            mime_type: infer_type_for_path(path).to_owned(),
        })
    }
}
