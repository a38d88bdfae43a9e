//! Category filters.
//!
//! A filter list is a comma-separated sequence such as `-whitespace,+whitespace/tabs`.
//! Each entry force-enables (`+`) or force-disables (`-`) every category whose
//! name starts with the given prefix. Entries are evaluated in order and the
//! last matching one wins.

use std::fmt;
use std::str::FromStr;

use crate::category::Category;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    #[error("Filter should start with - or +")]
    MissingSign(String),
    #[error("Filter not allowed: {0}")]
    UnknownCategory(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Include,
    Exclude,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub polarity: Polarity,
    pub prefix: String,
}

impl Filter {
    pub fn matches(&self, category: Category) -> bool {
        category.name().starts_with(&self.prefix)
    }
}

impl FromStr for Filter {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (polarity, prefix) = if let Some(rest) = s.strip_prefix('+') {
            (Polarity::Include, rest)
        } else if let Some(rest) = s.strip_prefix('-') {
            (Polarity::Exclude, rest)
        } else {
            return Err(FilterError::MissingSign(s.to_string()));
        };

        if !Category::is_known_prefix(prefix) {
            return Err(FilterError::UnknownCategory(s.to_string()));
        }

        Ok(Filter { polarity, prefix: prefix.to_string() })
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = match self.polarity {
            Polarity::Include => '+',
            Polarity::Exclude => '-',
        };
        write!(f, "{sign}{}", self.prefix)
    }
}

/// Split a comma-separated filter list into its (trimmed, non-empty) tokens.
pub fn split_filter_list(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|s| !s.is_empty())
}

/// Parse a whole filter list, failing on the first invalid entry.
pub fn parse_filter_list(list: &str) -> Result<Vec<Filter>, FilterError> {
    split_filter_list(list).map(Filter::from_str).collect()
}

/// An ordered list of filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    filters: Vec<Filter>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, filter: Filter) {
        self.filters.push(filter);
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Filter> {
        self.filters.iter()
    }

    /// Whether findings of this category should be reported. Categories are
    /// reported unless the last filter matching them is an exclusion.
    pub fn should_report(&self, category: Category) -> bool {
        self.filters
            .iter()
            .rev()
            .find(|f| f.matches(category))
            .is_none_or(|f| f.polarity == Polarity::Include)
    }
}

impl Extend<Filter> for FilterSet {
    fn extend<I: IntoIterator<Item = Filter>>(&mut self, iter: I) {
        self.filters.extend(iter);
    }
}

impl FromIterator<Filter> for FilterSet {
    fn from_iter<I: IntoIterator<Item = Filter>>(iter: I) -> Self {
        FilterSet { filters: iter.into_iter().collect() }
    }
}
