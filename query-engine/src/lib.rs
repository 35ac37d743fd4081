//! FILENAME: query-engine/src/lib.rs
//! Query subsystem for the facility atlas.
//!
//! This crate provides the filter/search/sort pipeline as a standalone
//! module. It depends on `engine` for the record model and the collation
//! seam.
//!
//! Layers:
//! - `definition`: Serializable query state (what the query IS)
//! - `engine`: Pure calculation (HOW we filter and order)
//! - `view`: Renderable output and filter options (WHAT we display)

pub mod definition;
pub mod engine;
pub mod view;

pub use self::definition::{FilterSelection, QueryState, SortKey, ALL_SENTINEL};
pub use self::engine::query;
pub use self::view::{build_view, distinct_values, filter_options, FilterOptions, QueryView};
