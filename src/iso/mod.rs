//! Country name to ISO alpha-3 lookup

pub mod countries;

pub use countries::{by_alpha3, Country, COUNTRIES};

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Common names for countries whose ISO short name is awkward to match
pub const ALIASES: &[(&str, &[&str])] = &[
    ("United States of America", &["United States", "USA"]),
    ("Russian Federation", &["Russia"]),
    (
        "United Kingdom of Great Britain and Northern Ireland",
        &["United Kingdom", "UK"],
    ),
    ("Korea, Republic of", &["South Korea"]),
    ("Korea, Democratic People's Republic of", &["North Korea"]),
    ("Venezuela, Bolivarian Republic of", &["Venezuela"]),
    ("Tanzania, United Republic of", &["Tanzania"]),
    ("Viet Nam", &["Vietnam"]),
    ("Syrian Arab Republic", &["Syria"]),
    ("Iran, Islamic Republic of", &["Iran"]),
    ("Bolivia, Plurinational State of", &["Bolivia"]),
    ("Lao People's Democratic Republic", &["Laos"]),
    ("Timor-Leste", &["East Timor"]),
    ("Cabo Verde", &["Cape Verde"]),
];

/// Names registered regardless of the reference list
pub const EXTRA_ENTRIES: &[(&str, &str)] = &[("Macao", "MAC"), ("Macau", "MAC")];

static SHARED: Lazy<IsoTable> = Lazy::new(IsoTable::build);

/// Insertion-ordered map from country name to alpha-3 code. Several names may
/// share a code.
#[derive(Debug, Clone, Default)]
pub struct IsoTable {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl IsoTable {
    /// Build the table from the reference list, aliases and extra entries
    pub fn build() -> Self {
        let mut table = Self::default();

        for country in COUNTRIES {
            table.insert(country.name, country.alpha3);
            if let Some((_, aliases)) = ALIASES.iter().find(|(name, _)| *name == country.name) {
                for alias in *aliases {
                    table.insert(alias, country.alpha3);
                }
            }
        }

        for (name, code) in EXTRA_ENTRIES {
            table.insert(name, code);
        }

        table
    }

    /// Table built once per process
    pub fn shared() -> &'static IsoTable {
        &SHARED
    }

    /// Register a name. An existing name keeps its position and takes the new code.
    pub fn insert(&mut self, name: &str, code: &str) {
        match self.index.get(name) {
            Some(&idx) => self.entries[idx].1 = code.to_string(),
            None => {
                self.index.insert(name.to_string(), self.entries.len());
                self.entries.push((name.to_string(), code.to_string()));
            }
        }
    }

    /// Exact name lookup
    pub fn get(&self, name: &str) -> Option<&str> {
        self.index
            .get(name)
            .map(|&idx| self.entries[idx].1.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, c)| (n.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
