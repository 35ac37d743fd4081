//! FILENAME: query-engine/src/definition.rs
//! PURPOSE: Query State - the serializable query configuration.
//!
//! This module contains the types that DESCRIBE a query. These structures
//! are designed to be:
//! - Serializable (for sending across a UI bridge)
//! - Immutable snapshots of user intent
//!
//! The presentation layer builds a fresh `QueryState` between queries;
//! nothing here is mutated while a query runs. Unrecognized raw values
//! coming from widgets degrade to permissive defaults instead of erroring.

use engine::{display_or_unselected, FilterAttr};
use serde::{Deserialize, Serialize};

/// Raw widget value meaning "impose no constraint for this attribute".
pub const ALL_SENTINEL: &str = "__ALL__";

// ============================================================================
// FILTER SELECTION
// ============================================================================

/// The active filter for one categorical attribute.
///
/// A record side with an empty value is normalized to the placeholder label
/// before the equality check, so a filter set to the placeholder matches
/// records whose attribute was left blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterSelection {
    /// No constraint; every record passes.
    MatchAll,
    /// The record's (absence-normalized) value must equal this exactly,
    /// case-sensitive.
    Equals(String),
}

impl FilterSelection {
    /// Builds a selection from a raw widget value. The all-sentinel maps to
    /// `MatchAll`; anything else is an exact-match value.
    pub fn from_raw(raw: &str) -> Self {
        if raw == ALL_SENTINEL {
            FilterSelection::MatchAll
        } else {
            FilterSelection::Equals(raw.to_string())
        }
    }

    /// Tests a record's raw attribute value against this selection.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            FilterSelection::MatchAll => true,
            FilterSelection::Equals(wanted) => display_or_unselected(value) == wanted,
        }
    }
}

impl Default for FilterSelection {
    fn default() -> Self {
        FilterSelection::MatchAll
    }
}

// ============================================================================
// SORT KEY
// ============================================================================

/// The selectable orderings. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Name ascending under the base-strength collation.
    NameAsc,
    /// X coordinate ascending, absent values first.
    XAsc,
    /// Z coordinate ascending, absent values first.
    ZAsc,
    /// Y coordinate ascending, absent values first.
    YAsc,
    /// Y coordinate descending, absent values first.
    YDesc,
}

impl SortKey {
    /// Parses a raw widget value. Unknown values yield `None`, which leaves
    /// the filtered records in source order.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "nameAsc" => Some(SortKey::NameAsc),
            "xAsc" => Some(SortKey::XAsc),
            "zAsc" => Some(SortKey::ZAsc),
            "yAsc" => Some(SortKey::YAsc),
            "yDesc" => Some(SortKey::YDesc),
            _ => None,
        }
    }
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::NameAsc
    }
}

// ============================================================================
// QUERY STATE
// ============================================================================

/// The complete, serializable state of one query: search text, one filter
/// selection per categorical attribute, the active sort key, and the Nether
/// coordinate display toggle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryState {
    /// Free-text search; trimmed and lowercased before matching.
    #[serde(default)]
    pub search: String,

    /// Filter on the author attribute.
    #[serde(default)]
    pub author: FilterSelection,

    /// Filter on the category attribute.
    #[serde(default)]
    pub category: FilterSelection,

    /// Filter on the region attribute.
    #[serde(default)]
    pub region: FilterSelection,

    /// Active ordering; `None` preserves source order.
    #[serde(default = "default_sort")]
    pub sort: Option<SortKey>,

    /// Whether the presentation layer shows Nether coordinates.
    #[serde(default)]
    pub show_nether: bool,
}

fn default_sort() -> Option<SortKey> {
    Some(SortKey::NameAsc)
}

impl Default for QueryState {
    fn default() -> Self {
        QueryState {
            search: String::new(),
            author: FilterSelection::MatchAll,
            category: FilterSelection::MatchAll,
            region: FilterSelection::MatchAll,
            sort: Some(SortKey::NameAsc),
            show_nether: false,
        }
    }
}

impl QueryState {
    /// Returns the active selection for a filterable attribute.
    pub fn selection(&self, attr: FilterAttr) -> &FilterSelection {
        match attr {
            FilterAttr::Author => &self.author,
            FilterAttr::Category => &self.category,
            FilterAttr::Region => &self.region,
        }
    }

    /// Replaces the selection for a filterable attribute, returning a new
    /// state. Mutation between queries always goes through fresh values.
    pub fn with_selection(mut self, attr: FilterAttr, selection: FilterSelection) -> Self {
        match attr {
            FilterAttr::Author => self.author = selection,
            FilterAttr::Category => self.category = selection,
            FilterAttr::Region => self.region = selection,
        }
        self
    }
}
