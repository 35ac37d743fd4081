//! FILENAME: query-engine/src/engine.rs
//! PURPOSE: Query Engine - the pure filter/search/sort calculation.
//!
//! This module takes the base facility collection and a `QueryState` and
//! produces the filtered, ordered sequence for presentation.
//!
//! Algorithm:
//! 1. Keep records passing every categorical filter AND the search predicate
//! 2. Sort the survivors by the active sort key (stable, absent-first)
//!
//! Every call re-derives the result from the full base collection; nothing
//! is cached or incrementally maintained, so a query is a pure function of
//! (collection, state).

use std::cmp::Ordering;

use engine::{Collation, Facility, FilterAttr};

use crate::definition::{QueryState, SortKey};

/// Applies filters, search, and ordering to the base collection.
///
/// Returns borrows into `facilities` in result order. The base collection
/// itself is never reordered; sorting is re-derived on every call.
pub fn query<'a>(
    facilities: &'a [Facility],
    state: &QueryState,
    collation: &dyn Collation,
) -> Vec<&'a Facility> {
    let needle = state.search.trim().to_lowercase();

    let mut result: Vec<&Facility> = facilities
        .iter()
        .filter(|f| passes_filters(f, state) && passes_search(f, &needle))
        .collect();

    if let Some(sort) = state.sort {
        sort_facilities(&mut result, sort, collation);
    }

    result
}

/// Each categorical attribute is checked independently; all must pass.
fn passes_filters(facility: &Facility, state: &QueryState) -> bool {
    FilterAttr::ALL
        .iter()
        .all(|attr| state.selection(*attr).matches(facility.attr(*attr)))
}

/// Substring search over name, author, description, and tags.
/// `needle` is already trimmed and lowercased; empty matches everything.
fn passes_search(facility: &Facility, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let haystack = format!(
        "{}\n{}\n{}\n{}",
        facility.name,
        facility.author,
        facility.description,
        facility.tags.join(" ")
    )
    .to_lowercase();
    haystack.contains(needle)
}

/// Stable sort by the active key. `sort_by` preserves the relative source
/// order of records whose keys compare equal.
fn sort_facilities(list: &mut [&Facility], key: SortKey, collation: &dyn Collation) {
    match key {
        SortKey::NameAsc => list.sort_by(|a, b| collation.compare(&a.name, &b.name)),
        SortKey::XAsc => list.sort_by(|a, b| cmp_num_asc(a.x, b.x)),
        SortKey::ZAsc => list.sort_by(|a, b| cmp_num_asc(a.z, b.z)),
        SortKey::YAsc => list.sort_by(|a, b| cmp_num_asc(a.y, b.y)),
        SortKey::YDesc => list.sort_by(|a, b| cmp_num_desc(a.y, b.y)),
    }
}

/// Ascending numeric comparison with absent values first.
fn cmp_num_asc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        // NaN never survives numeric coercion, so partial_cmp cannot fail
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Descending numeric comparison, still with absent values first.
fn cmp_num_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}
