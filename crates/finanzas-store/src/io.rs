//! Key/value JSON files on disk.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

const CONFIG_DIR_NAME: &str = "finanzas";
const CWD_DIR_NAME: &str = ".finanzas";

/// A directory of `<key>.json` files.
///
/// Reads and writes never fail loudly: errors are logged and reported as
/// `false` or `None` so a broken store never blocks a calculation.
#[derive(Debug, Clone)]
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    /// Store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store at the standard location: the XDG config dir, else `./.finanzas`.
    #[must_use]
    pub fn open_default() -> Self {
        Self::new(default_dir())
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Serialize `value` under `key`. Returns whether it was written.
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> bool {
        match self.try_save(key, value) {
            Ok(()) => {
                tracing::debug!(key, dir = %self.dir.display(), "saved");
                true
            }
            Err(e) => {
                tracing::error!(key, error = %e, "failed to save to local store");
                false
            }
        }
    }

    /// Read the value under `key`, `None` if absent or unreadable.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.path_for(key);
        if !path.exists() {
            return None;
        }
        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(key, error = %e, "failed to read local store");
                return None;
            }
        };
        match serde_json::from_str(&content) {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::error!(key, error = %e, "corrupt entry in local store");
                None
            }
        }
    }

    /// Delete the value under `key`. Returns whether a file was removed.
    pub fn remove(&self, key: &str) -> std::io::Result<bool> {
        let path = self.path_for(key);
        if path.exists() {
            std::fs::remove_file(&path)?;
            return Ok(true);
        }
        Ok(false)
    }

    fn try_save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let content = serde_json::to_string_pretty(value).map_err(std::io::Error::other)?;
        std::fs::write(self.path_for(key), content)
    }
}

/// Default store directory.
#[must_use]
pub fn default_dir() -> PathBuf {
    xdg_store_dir().unwrap_or_else(cwd_store_dir)
}

/// `$XDG_CONFIG_HOME/finanzas`, or `~/.config/finanzas`.
fn xdg_store_dir() -> Option<PathBuf> {
    let config_dir = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var_os("HOME").map(|home| {
                let mut p = PathBuf::from(home);
                p.push(".config");
                p
            })
        })?;

    Some(config_dir.join(CONFIG_DIR_NAME))
}

fn cwd_store_dir() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(CWD_DIR_NAME)
}
