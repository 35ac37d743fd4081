//! FILENAME: query-engine/src/view.rs
//! PURPOSE: Query View - the presentation-facing output of a query.
//!
//! This module wraps the filtered sequence with the count pair the header
//! line shows, and computes the distinct-value lists the filter dropdowns
//! are populated from. Option lists are recomputed from scratch whenever
//! the base collection changes; nothing is maintained incrementally.

use engine::{display_or_unselected, Collation, Facility, FilterAttr};
use rustc_hash::FxHashSet;

use crate::definition::QueryState;
use crate::engine::query;

// ============================================================================
// QUERY VIEW
// ============================================================================

/// The result of one query evaluation: the matching records in result
/// order, plus the (total, matching) count pair.
#[derive(Debug)]
pub struct QueryView<'a> {
    /// Matching records, filtered and ordered.
    pub facilities: Vec<&'a Facility>,

    /// Size of the base collection.
    pub total: usize,

    /// Number of records that matched.
    pub matching: usize,
}

impl<'a> QueryView<'a> {
    /// The header line: "N件中 M件を表示".
    pub fn counts_label(&self) -> String {
        format!("{}件中 {}件を表示", self.total, self.matching)
    }
}

/// Evaluates the query and packages the result with its counts.
pub fn build_view<'a>(
    facilities: &'a [Facility],
    state: &QueryState,
    collation: &dyn Collation,
) -> QueryView<'a> {
    let matched = query(facilities, state, collation);
    QueryView {
        total: facilities.len(),
        matching: matched.len(),
        facilities: matched,
    }
}

// ============================================================================
// FILTER OPTIONS
// ============================================================================

/// Distinct observed values for each filterable attribute, ready to
/// populate the corresponding dropdowns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    pub authors: Vec<String>,
    pub categories: Vec<String>,
    pub regions: Vec<String>,
}

/// Computes the option lists for all three filterable attributes.
pub fn filter_options(facilities: &[Facility], collation: &dyn Collation) -> FilterOptions {
    FilterOptions {
        authors: distinct_values(facilities, FilterAttr::Author, collation),
        categories: distinct_values(facilities, FilterAttr::Category, collation),
        regions: distinct_values(facilities, FilterAttr::Region, collation),
    }
}

/// Every distinct value observed for `attr`, with absence normalized to the
/// placeholder label, deduplicated, and ordered by the same collation used
/// for name sorting.
pub fn distinct_values(
    facilities: &[Facility],
    attr: FilterAttr,
    collation: &dyn Collation,
) -> Vec<String> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut values: Vec<String> = Vec::new();

    for facility in facilities {
        let value = display_or_unselected(facility.attr(attr));
        if seen.insert(value) {
            values.push(value.to_string());
        }
    }

    values.sort_by(|a, b| collation.compare(a, b));
    values
}
