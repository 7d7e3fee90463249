use anyhow::Result;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::classify::{Classifier, CountryRecord, MatchMode, Precedence};
use crate::dataset::{CacheManager, LoadedLists};
use crate::iso::IsoTable;
use crate::render::MapSummary;

/// Options shared by every command
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub cache_dir: Option<PathBuf>,
    pub force: bool,
    pub precedence: Precedence,
    pub match_mode: MatchMode,
}

/// Loaded lists, classified table and presentation summary for one run
pub struct VisaMap {
    pub loaded: LoadedLists,
    pub records: Vec<CountryRecord>,
    pub summary: MapSummary,
}

impl VisaMap {
    /// Load the lists (cache or embedded), build the ISO table and classify it.
    ///
    /// An unusable cache directory is not fatal: the embedded lists are used
    /// and nothing is written.
    pub fn build(settings: &Settings) -> Result<Self> {
        let loaded = match CacheManager::new(settings.cache_dir.clone()) {
            Ok(cache) => cache.load_or_build(settings.force),
            Err(e) => {
                warn!("Cache unavailable, using embedded lists: {:#}", e);
                LoadedLists::embedded()
            }
        };
        Ok(Self::from_lists(loaded, IsoTable::shared(), settings))
    }

    pub fn from_lists(loaded: LoadedLists, table: &IsoTable, settings: &Settings) -> Self {
        let classifier = Classifier::new(settings.precedence.clone(), settings.match_mode);
        let records = classifier.classify(table, &loaded.lists);
        let summary = MapSummary::build(&records, &loaded, &settings.precedence);

        info!(
            source = ?loaded.source,
            names = records.len(),
            regions = summary.locations.len(),
            "Built visa map"
        );

        Self {
            loaded,
            records,
            summary,
        }
    }

    /// Resolve a name or alias (exact, then ignoring case) to its classified record
    pub fn lookup(&self, name: &str) -> Option<&CountryRecord> {
        self.records
            .iter()
            .find(|r| r.name == name)
            .or_else(|| {
                let wanted = name.trim().to_lowercase();
                self.records.iter().find(|r| r.name.to_lowercase() == wanted)
            })
    }
}
