use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{error, info, warn};

use super::VisaLists;

/// File name of the persisted category lists
pub const CACHE_FILE: &str = "visa_free_countries.json";

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Where the category lists in use came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSource {
    /// Loaded from an existing cache file
    Cache,
    /// Built from the embedded lists (cache written if possible)
    Embedded,
    /// Cache could not be read; every list is empty
    Fallback,
}

/// Result of loading the category lists
#[derive(Debug, Clone)]
pub struct LoadedLists {
    pub lists: VisaLists,
    pub source: ListSource,
    /// User-facing message when the cache was unusable
    pub error: Option<String>,
}

impl LoadedLists {
    /// Embedded lists used without any cache file
    pub fn embedded() -> Self {
        Self {
            lists: VisaLists::embedded(),
            source: ListSource::Embedded,
            error: None,
        }
    }
}

pub struct CacheManager {
    cache_dir: PathBuf,
}

impl CacheManager {
    /// Cache in `custom_dir`, or in the platform cache directory
    /// (`~/.cache/visa-map` on Linux). The directory is created if missing.
    pub fn new(custom_dir: Option<PathBuf>) -> Result<Self> {
        let cache_dir = match custom_dir {
            Some(dir) => dir,
            None => {
                let proj_dirs = ProjectDirs::from("", "", "visa-map")
                    .context("Could not determine cache directory")?;
                proj_dirs.cache_dir().to_path_buf()
            }
        };

        fs::create_dir_all(&cache_dir).context("Failed to create cache directory")?;

        Ok(Self { cache_dir })
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    pub fn cache_path(&self) -> PathBuf {
        self.cache_dir.join(CACHE_FILE)
    }

    pub fn is_cached(&self) -> bool {
        self.cache_path().exists()
    }

    /// Read the cached lists verbatim
    pub fn read(&self) -> Result<VisaLists, CacheError> {
        let path = self.cache_path();
        let text = fs::read_to_string(&path).map_err(|source| CacheError::Read {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| CacheError::Parse { path, source })
    }

    pub fn write(&self, lists: &VisaLists) -> Result<()> {
        let path = self.cache_path();
        let json = serde_json::to_string(lists).context("Failed to serialize visa lists")?;
        fs::write(&path, json).with_context(|| format!("Failed to write cache: {:?}", path))?;
        Ok(())
    }

    /// Return the category lists, preferring the cache file.
    ///
    /// An existing cache is used as-is and never refreshed unless `force` is
    /// set. A cache that cannot be read or parsed degrades to empty lists so
    /// that every country shows as visa required.
    pub fn load_or_build(&self, force: bool) -> LoadedLists {
        if self.is_cached() && !force {
            return match self.read() {
                Ok(lists) => {
                    info!(path = ?self.cache_path(), entries = lists.total(), "Loaded visa lists from cache");
                    LoadedLists {
                        lists,
                        source: ListSource::Cache,
                        error: None,
                    }
                }
                Err(e) => {
                    error!("Error getting visa-free countries: {}", e);
                    LoadedLists {
                        lists: VisaLists::default(),
                        source: ListSource::Fallback,
                        error: Some(format!("Error getting visa-free countries: {}", e)),
                    }
                }
            };
        }

        let loaded = LoadedLists::embedded();
        match self.write(&loaded.lists) {
            Ok(()) => info!(path = ?self.cache_path(), "Wrote visa list cache"),
            Err(e) => warn!("Could not cache visa lists: {:#}", e),
        }
        loaded
    }
}
