//! Temporary copies of files handed to other apps.
//!
//! Files inside app-private storage are copied here before sharing because
//! the receiving app cannot open them directly. Entries are named after the
//! source file and removed by [`ShareCache::evict_stale`] once they are older
//! than the configured age. There is no locking: two shares of identically
//! named files may overwrite each other's copy.

use std::ffi::OsStr;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tracing::{debug, warn};

/// Age after which a cached copy is deleted.
pub const DEFAULT_MAX_AGE: Duration = Duration::from_secs(60 * 60);

#[derive(Debug, Clone)]
pub struct ShareCache {
    dir: PathBuf,
    max_age: Duration,
}

impl ShareCache {
    pub fn new(dir: impl Into<PathBuf>, max_age: Duration) -> Self {
        Self {
            dir: dir.into(),
            max_age,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Deletes every cached file older than the maximum age.
    ///
    /// Never fails: problems are logged and the remaining entries are still
    /// visited. Returns how many files were removed.
    pub fn evict_stale(&self) -> usize {
        self.evict_stale_at(SystemTime::now())
    }

    /// [`evict_stale`](Self::evict_stale) against an explicit clock.
    pub fn evict_stale_at(&self, now: SystemTime) -> usize {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return 0,
            Err(e) => {
                warn!("Could not read share cache {}: {}", self.dir.display(), e);
                return 0;
            }
        };

        let Some(cutoff) = now.checked_sub(self.max_age) else {
            return 0;
        };

        let mut removed = 0;
        for entry in entries {
            let path = match entry {
                Ok(entry) => entry.path(),
                Err(e) => {
                    warn!("Could not list share cache entry: {}", e);
                    continue;
                }
            };

            match remove_if_older(&path, cutoff) {
                Ok(true) => removed += 1,
                Ok(false) => {}
                Err(e) => warn!("Could not evict {}: {}", path.display(), e),
            }
        }

        if removed > 0 {
            debug!("Evicted {} stale file(s) from {}", removed, self.dir.display());
        }
        removed
    }

    /// Copies `source` into the cache as `name` and returns the copy's path.
    /// An existing entry with the same name is overwritten. A copy that fails
    /// partway is removed.
    pub fn stage(&self, source: &Path, name: &OsStr) -> io::Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let destination = self.dir.join(name);
        if destination == source {
            return Ok(destination);
        }

        let mut input = File::open(source)?;
        let mut output = File::create(&destination)?;
        if let Err(e) = io::copy(&mut input, &mut output) {
            drop(output);
            if let Err(remove_err) = fs::remove_file(&destination) {
                warn!(
                    "Could not remove partial copy {}: {}",
                    destination.display(),
                    remove_err
                );
            }
            return Err(e);
        }
        Ok(destination)
    }
}

fn remove_if_older(path: &Path, cutoff: SystemTime) -> io::Result<bool> {
    let metadata = fs::metadata(path)?;
    if !metadata.is_file() || metadata.modified()? >= cutoff {
        return Ok(false);
    }
    fs::remove_file(path)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache_in(dir: &Path) -> ShareCache {
        ShareCache::new(dir.join("share"), DEFAULT_MAX_AGE)
    }

    #[test]
    fn test_evict_missing_dir_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let cache = cache_in(dir.path());

        assert_eq!(cache.evict_stale(), 0);
        assert!(!cache.dir().exists());
    }

    #[test]
    fn test_evict_keeps_fresh_files() {
        let dir = tempfile::tempdir().unwrap();
        let cache = cache_in(dir.path());
        fs::create_dir_all(cache.dir()).unwrap();
        fs::write(cache.dir().join("fresh.png"), b"png").unwrap();

        assert_eq!(cache.evict_stale(), 0);
        assert!(cache.dir().join("fresh.png").exists());
    }

    #[test]
    fn test_evict_removes_files_older_than_an_hour() {
        let dir = tempfile::tempdir().unwrap();
        let cache = cache_in(dir.path());
        fs::create_dir_all(cache.dir()).unwrap();
        fs::write(cache.dir().join("a.pdf"), b"a").unwrap();
        fs::write(cache.dir().join("b.mp3"), b"b").unwrap();

        let within_the_hour = SystemTime::now() + Duration::from_secs(30 * 60);
        assert_eq!(cache.evict_stale_at(within_the_hour), 0);

        let two_hours_later = SystemTime::now() + Duration::from_secs(2 * 60 * 60);
        assert_eq!(cache.evict_stale_at(two_hours_later), 2);
        assert_eq!(fs::read_dir(cache.dir()).unwrap().count(), 0);
    }

    #[test]
    fn test_evict_twice_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let cache = cache_in(dir.path());
        fs::create_dir_all(cache.dir()).unwrap();
        fs::write(cache.dir().join("old.txt"), b"old").unwrap();

        let later = SystemTime::now() + Duration::from_secs(2 * 60 * 60);
        assert_eq!(cache.evict_stale_at(later), 1);
        assert_eq!(cache.evict_stale_at(later), 0);
    }

    #[test]
    fn test_evict_skips_directories() {
        let dir = tempfile::tempdir().unwrap();
        let cache = cache_in(dir.path());
        fs::create_dir_all(cache.dir().join("nested")).unwrap();

        let later = SystemTime::now() + Duration::from_secs(2 * 60 * 60);
        assert_eq!(cache.evict_stale_at(later), 0);
        assert!(cache.dir().join("nested").is_dir());
    }

    #[test]
    fn test_stage_copies_bytes_under_base_name() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("report.pdf");
        fs::write(&source, b"%PDF-1.7 body").unwrap();
        let cache = cache_in(dir.path());

        let copy = cache.stage(&source, OsStr::new("report.pdf")).unwrap();

        assert_eq!(copy, cache.dir().join("report.pdf"));
        assert_eq!(fs::read(&copy).unwrap(), b"%PDF-1.7 body");
        assert!(source.exists());
    }

    #[test]
    fn test_stage_overwrites_same_name() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("one").join("clip.mp4");
        let second = dir.path().join("two").join("clip.mp4");
        fs::create_dir_all(first.parent().unwrap()).unwrap();
        fs::create_dir_all(second.parent().unwrap()).unwrap();
        fs::write(&first, b"first").unwrap();
        fs::write(&second, b"second").unwrap();
        let cache = cache_in(dir.path());

        let name = OsStr::new("clip.mp4");
        cache.stage(&first, name).unwrap();
        let copy = cache.stage(&second, name).unwrap();

        assert_eq!(fs::read(copy).unwrap(), b"second");
    }

    #[test]
    fn test_stage_missing_source_fails() {
        let dir = tempfile::tempdir().unwrap();
        let cache = cache_in(dir.path());

        assert!(cache
            .stage(&dir.path().join("gone.pdf"), OsStr::new("gone.pdf"))
            .is_err());
    }

    #[test]
    fn test_stage_uses_given_name() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("blob0001");
        fs::write(&source, b"%PDF").unwrap();
        let cache = cache_in(dir.path());

        let copy = cache.stage(&source, OsStr::new("report.pdf")).unwrap();

        assert_eq!(copy, cache.dir().join("report.pdf"));
        assert_eq!(fs::read(&copy).unwrap(), b"%PDF");
    }

    #[cfg(unix)]
    #[test]
    fn test_stage_failed_copy_leaves_nothing_behind() {
        let dir = tempfile::tempdir().unwrap();
        // Opening a directory succeeds on unix but reading from it fails, so
        // the copy breaks after the destination was created.
        let source = dir.path().join("not_a_file");
        fs::create_dir_all(&source).unwrap();
        let cache = cache_in(dir.path());

        assert!(cache.stage(&source, OsStr::new("clip.mp4")).is_err());
        assert!(!cache.dir().join("clip.mp4").exists());
    }

    #[test]
    fn test_evict_unreadable_cache_dir_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        let cache = cache_in(dir.path());
        fs::write(cache.dir(), b"not a directory").unwrap();

        let later = SystemTime::now() + Duration::from_secs(2 * 60 * 60);
        assert_eq!(cache.evict_stale_at(later), 0);
        assert!(cache.dir().is_file());
    }
}
