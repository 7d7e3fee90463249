//! Matching rules used when joining country names against the curated lists

use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::VisaCategory;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("{0}")]
    UnknownCategory(String),

    #[error("visa_required is the fallback category and cannot be ranked")]
    FallbackRanked,

    #[error("{0} is listed more than once")]
    Duplicate(VisaCategory),

    #[error("precedence must name all three of visa-free, visa-on-arrival, e-visa (got {0})")]
    Incomplete(usize),
}

/// Ordered ranking of the list-backed categories. When a name matches several
/// lists, the category that appears first wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Precedence {
    order: [VisaCategory; 3],
}

impl Precedence {
    pub fn new(order: &[VisaCategory]) -> Result<Self, PolicyError> {
        let mut seen: Vec<VisaCategory> = Vec::with_capacity(3);
        for &category in order {
            if category == VisaCategory::VisaRequired {
                return Err(PolicyError::FallbackRanked);
            }
            if seen.contains(&category) {
                return Err(PolicyError::Duplicate(category));
            }
            seen.push(category);
        }

        match seen.as_slice() {
            &[a, b, c] => Ok(Self { order: [a, b, c] }),
            other => Err(PolicyError::Incomplete(other.len())),
        }
    }

    /// Visa-free first, then visa-on-arrival, then e-visa
    pub fn most_permissive_first() -> Self {
        Self {
            order: [
                VisaCategory::VisaFree,
                VisaCategory::VisaOnArrival,
                VisaCategory::EVisa,
            ],
        }
    }

    pub fn order(&self) -> &[VisaCategory] {
        &self.order
    }

    /// Position of a category in the ranking; the fallback ranks last
    pub fn rank(&self, category: VisaCategory) -> usize {
        self.order
            .iter()
            .position(|c| *c == category)
            .unwrap_or(self.order.len())
    }

    /// Pick the winning category out of the ones a name matched
    pub fn resolve(&self, matched: &[VisaCategory]) -> VisaCategory {
        self.order
            .iter()
            .copied()
            .find(|c| matched.contains(c))
            .unwrap_or(VisaCategory::VisaRequired)
    }
}

impl Default for Precedence {
    /// e-visa outranks visa-on-arrival, which outranks visa-free. This is the
    /// outcome the published map has always shown for overlapping names.
    fn default() -> Self {
        Self {
            order: [
                VisaCategory::EVisa,
                VisaCategory::VisaOnArrival,
                VisaCategory::VisaFree,
            ],
        }
    }
}

impl FromStr for Precedence {
    type Err = PolicyError;

    /// Comma-separated list, e.g. `visa-free,visa-on-arrival,e-visa`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let categories = s
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(|part| part.parse::<VisaCategory>().map_err(PolicyError::UnknownCategory))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&categories)
    }
}

impl fmt::Display for Precedence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Vec<String> = self.order.iter().map(|c| c.key().replace('_', "-")).collect();
        write!(f, "{}", keys.join(","))
    }
}

/// How a curated list entry is compared with a country name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MatchMode {
    /// Entry appears anywhere in the name, ignoring case
    #[default]
    Substring,
    /// Entry equals the name, ignoring case and surrounding whitespace
    Exact,
    /// Exact matches only; substring matching when no list matches exactly
    ExactThenSubstring,
}

impl MatchMode {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchMode::Substring => "substring",
            MatchMode::Exact => "exact",
            MatchMode::ExactThenSubstring => "exact-then-substring",
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_precedence() {
        let p = Precedence::default();
        assert_eq!(
            p.resolve(&[VisaCategory::VisaFree, VisaCategory::EVisa]),
            VisaCategory::EVisa
        );
        assert_eq!(
            p.resolve(&[VisaCategory::VisaFree, VisaCategory::VisaOnArrival]),
            VisaCategory::VisaOnArrival
        );
        assert_eq!(p.resolve(&[]), VisaCategory::VisaRequired);
    }

    #[test]
    fn test_parse_precedence() {
        let p: Precedence = "visa-free, visa-on-arrival, e-visa".parse().unwrap();
        assert_eq!(p, Precedence::most_permissive_first());
        assert_eq!(p.to_string(), "visa-free,visa-on-arrival,e-visa");
        assert_eq!(p.rank(VisaCategory::VisaRequired), 3);
    }

    #[test]
    fn test_invalid_precedence() {
        assert_eq!(
            "visa-free,e-visa".parse::<Precedence>(),
            Err(PolicyError::Incomplete(2))
        );
        assert_eq!(
            "visa-free,visa-free,e-visa".parse::<Precedence>(),
            Err(PolicyError::Duplicate(VisaCategory::VisaFree))
        );
        assert_eq!(
            "visa-required,visa-free,e-visa".parse::<Precedence>(),
            Err(PolicyError::FallbackRanked)
        );
        assert!(matches!(
            "free,e-visa,visa-on-arrival".parse::<Precedence>(),
            Err(PolicyError::UnknownCategory(_))
        ));
    }
}
