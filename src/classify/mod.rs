//! Joins the ISO code table against the curated visa lists

pub mod category;
pub mod policy;

pub use category::*;
pub use policy::*;

use serde::Serialize;
use tracing::debug;

use crate::dataset::VisaLists;
use crate::iso::IsoTable;

/// One row of the classified table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryRecord {
    pub name: String,
    pub iso_code: String,
    pub category: VisaCategory,
}

/// Category assignment for country names
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    pub precedence: Precedence,
    pub match_mode: MatchMode,
}

impl Classifier {
    pub fn new(precedence: Precedence, match_mode: MatchMode) -> Self {
        Self {
            precedence,
            match_mode,
        }
    }

    /// Determine the category of a single country name
    pub fn categorize(&self, name: &str, lists: &VisaLists) -> VisaCategory {
        let matched = match self.match_mode {
            MatchMode::Substring => matching_categories(name, lists, contains_ignore_case),
            MatchMode::Exact => matching_categories(name, lists, equals_ignore_case),
            MatchMode::ExactThenSubstring => {
                let exact = matching_categories(name, lists, equals_ignore_case);
                if exact.is_empty() {
                    matching_categories(name, lists, contains_ignore_case)
                } else {
                    exact
                }
            }
        };

        self.precedence.resolve(&matched)
    }

    /// Classify every entry of the ISO table, in table order
    pub fn classify(&self, table: &IsoTable, lists: &VisaLists) -> Vec<CountryRecord> {
        let records: Vec<CountryRecord> = table
            .iter()
            .map(|(name, code)| CountryRecord {
                name: name.to_string(),
                iso_code: code.to_string(),
                category: self.categorize(name, lists),
            })
            .collect();

        debug!(
            records = records.len(),
            precedence = %self.precedence,
            match_mode = %self.match_mode,
            "Classified country table"
        );
        records
    }
}

fn matching_categories(
    name: &str,
    lists: &VisaLists,
    matches: fn(&str, &str) -> bool,
) -> Vec<VisaCategory> {
    VisaCategory::SPECIAL
        .into_iter()
        .filter(|&category| {
            lists
                .entries(category)
                .iter()
                .any(|entry| matches(name, entry))
        })
        .collect()
}

fn contains_ignore_case(name: &str, entry: &str) -> bool {
    name.to_lowercase().contains(&entry.to_lowercase())
}

fn equals_ignore_case(name: &str, entry: &str) -> bool {
    name.trim().to_lowercase() == entry.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lists(free: &[&str], arrival: &[&str], evisa: &[&str]) -> VisaLists {
        let own = |v: &[&str]| v.iter().map(|s| s.to_string()).collect();
        VisaLists {
            visa_free: own(free),
            visa_on_arrival: own(arrival),
            e_visa: own(evisa),
        }
    }

    #[test]
    fn test_substring_match() {
        let lists = lists(&["Singapore"], &[], &[]);
        let classifier = Classifier::default();
        assert_eq!(classifier.categorize("Singapore", &lists), VisaCategory::VisaFree);
        assert_eq!(
            classifier.categorize("Singapore City", &lists),
            VisaCategory::VisaFree
        );
        assert_eq!(classifier.categorize("singapore", &lists), VisaCategory::VisaFree);
        assert_eq!(classifier.categorize("Malaysia", &lists), VisaCategory::VisaRequired);
    }

    #[test]
    fn test_exact_match() {
        let lists = lists(&["Singapore"], &[], &[]);
        let classifier = Classifier::new(Precedence::default(), MatchMode::Exact);
        assert_eq!(classifier.categorize(" singapore ", &lists), VisaCategory::VisaFree);
        assert_eq!(
            classifier.categorize("Singapore City", &lists),
            VisaCategory::VisaRequired
        );
    }

    #[test]
    fn test_exact_then_substring() {
        // "Guinea" is contained in "Guinea-Bissau", but the exact entry wins
        let lists = lists(&[], &["Guinea-Bissau"], &["Guinea"]);
        let classifier = Classifier::new(Precedence::default(), MatchMode::ExactThenSubstring);
        assert_eq!(
            classifier.categorize("Guinea-Bissau", &lists),
            VisaCategory::VisaOnArrival
        );
        assert_eq!(
            classifier.categorize("Equatorial Guinea", &lists),
            VisaCategory::EVisa
        );

        let substring = Classifier::default();
        assert_eq!(
            substring.categorize("Guinea-Bissau", &lists),
            VisaCategory::EVisa
        );
    }

    #[test]
    fn test_overlap_uses_precedence() {
        let lists = lists(&[], &["Indiana"], &["India"]);
        let name = "Indiana Republic";

        let default = Classifier::default();
        assert_eq!(default.categorize(name, &lists), VisaCategory::EVisa);

        let permissive = Classifier::new(Precedence::most_permissive_first(), MatchMode::Substring);
        assert_eq!(permissive.categorize(name, &lists), VisaCategory::VisaOnArrival);
    }

    #[test]
    fn test_empty_lists_require_visa() {
        let classifier = Classifier::default();
        let table = IsoTable::build();
        let records = classifier.classify(&table, &VisaLists::default());
        assert_eq!(records.len(), table.len());
        assert!(records
            .iter()
            .all(|r| r.category == VisaCategory::VisaRequired));
    }
}
