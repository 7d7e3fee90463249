//! Presentation model shared by the HTML page, the terminal view and stdout output

pub mod html;
pub mod table;

pub use html::render_html;
pub use table::{write_json, write_lists, write_lookup, write_tsv};

use std::collections::BTreeMap;

use crate::classify::{CountryRecord, Precedence, VisaCategory};
use crate::dataset::{LoadedLists, PASSPORT, PASSPORT_DEMONYM};

/// One shaded region on the map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapLocation {
    pub iso_code: String,
    pub category: VisaCategory,
    /// Every table name mapped to this code, canonical name first
    pub names: Vec<String>,
}

impl MapLocation {
    pub fn display_name(&self) -> &str {
        self.names.first().map(String::as_str).unwrap_or(self.iso_code.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendEntry {
    pub category: VisaCategory,
    /// Entries in the curated list; the fallback category has no list
    pub listed: Option<usize>,
    /// Distinct ISO codes shaded in this category
    pub regions: usize,
}

impl LegendEntry {
    /// Legend caption, e.g. `Visa Free (21 countries)` or `Visa Required`
    pub fn caption(&self) -> String {
        match self.listed {
            Some(n) => format!("{} ({} countries)", self.category.label(), n),
            None => self.category.label().to_string(),
        }
    }
}

/// Everything a renderer needs, computed once
#[derive(Debug, Clone)]
pub struct MapSummary {
    pub passport: &'static str,
    pub demonym: &'static str,
    pub locations: Vec<MapLocation>,
    pub legend: Vec<LegendEntry>,
    /// Curated lists, sorted alphabetically, for the three list-backed categories
    pub lists: Vec<(VisaCategory, Vec<String>)>,
    /// Problem loading the lists, shown to the user
    pub notice: Option<String>,
}

impl MapSummary {
    /// Collapse records sharing an ISO code into one map location. When the
    /// names behind a code disagree, the category ranked highest by the
    /// precedence policy is shown.
    pub fn build(records: &[CountryRecord], loaded: &LoadedLists, precedence: &Precedence) -> Self {
        let mut by_code: BTreeMap<&str, MapLocation> = BTreeMap::new();

        for record in records {
            let location = by_code
                .entry(record.iso_code.as_str())
                .or_insert_with(|| MapLocation {
                    iso_code: record.iso_code.clone(),
                    category: record.category,
                    names: Vec::new(),
                });
            if precedence.rank(record.category) < precedence.rank(location.category) {
                location.category = record.category;
            }
            location.names.push(record.name.clone());
        }

        let locations: Vec<MapLocation> = by_code.into_values().collect();

        let legend = VisaCategory::ALL
            .into_iter()
            .map(|category| LegendEntry {
                category,
                listed: match category {
                    VisaCategory::VisaRequired => None,
                    listed => Some(loaded.lists.entries(listed).len()),
                },
                regions: locations.iter().filter(|l| l.category == category).count(),
            })
            .collect();

        let lists = VisaCategory::SPECIAL
            .into_iter()
            .map(|category| (category, loaded.lists.sorted(category)))
            .collect();

        Self {
            passport: PASSPORT,
            demonym: PASSPORT_DEMONYM,
            locations,
            legend,
            lists,
            notice: loaded.error.clone(),
        }
    }

    pub fn entry(&self, category: VisaCategory) -> Option<&LegendEntry> {
        self.legend.iter().find(|entry| entry.category == category)
    }

    /// Length of the curated list behind a category
    pub fn listed(&self, category: VisaCategory) -> Option<usize> {
        self.entry(category).and_then(|entry| entry.listed)
    }

    /// Distinct map regions shaded in a category
    pub fn regions(&self, category: VisaCategory) -> usize {
        self.entry(category).map(|entry| entry.regions).unwrap_or(0)
    }

    pub fn locations_in(&self, category: VisaCategory) -> impl Iterator<Item = &MapLocation> {
        self.locations.iter().filter(move |l| l.category == category)
    }

    pub fn sorted_list(&self, category: VisaCategory) -> &[String] {
        self.lists
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, names)| names.as_slice())
            .unwrap_or(&[])
    }
}
