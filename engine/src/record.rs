//! FILENAME: engine/src/record.rs
//! PURPOSE: Defines the fundamental data structure for a single facility.
//! CONTEXT: This file contains the `Facility` struct and the helpers that
//! normalize absent categorical values for filtering and display. A record
//! is immutable once mapped from a source row; absence of a coordinate is
//! `None` and is never replaced by zero anywhere in the pipeline.

use serde::{Deserialize, Serialize};

/// Label substituted for an absent/empty categorical value during filter
/// comparison, distinct-value computation, and display. It matches the
/// untouched default option of the source sheet's dropdowns.
pub const UNSELECTED: &str = "選択";

/// Fallback display name for a facility whose name cell was empty.
pub const UNNAMED: &str = "(名称未設定)";

/// One point of interest parsed from the facility sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    pub name: String,
    pub author: String,
    pub category: String,
    pub region: String,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
    pub description: String,
    pub tags: Vec<String>,
}

impl Facility {
    /// Returns the raw value of a filterable attribute.
    pub fn attr(&self, attr: FilterAttr) -> &str {
        match attr {
            FilterAttr::Author => &self.author,
            FilterAttr::Category => &self.category,
            FilterAttr::Region => &self.region,
        }
    }

    /// Display name with the fixed fallback for unnamed facilities.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            UNNAMED
        } else {
            &self.name
        }
    }

    /// Space-joined string of the coordinates that are present, in x y z
    /// order. This is the text offered for copying; absent coordinates are
    /// skipped entirely rather than rendered as zero.
    pub fn coord_text(&self) -> String {
        let parts: Vec<String> = [self.x, self.y, self.z]
            .into_iter()
            .filter_map(|v| v.map(format_coord))
            .collect();
        parts.join(" ")
    }

    /// Comma-joined tag list for table cells.
    pub fn tags_joined(&self) -> String {
        self.tags.join(", ")
    }

    /// True when every mapped field is empty or absent. Such records come
    /// from fully blank trailing rows and are dropped by the schema mapper.
    pub fn is_blank(&self) -> bool {
        self.name.is_empty()
            && self.author.is_empty()
            && self.category.is_empty()
            && self.region.is_empty()
            && self.description.is_empty()
            && self.x.is_none()
            && self.y.is_none()
            && self.z.is_none()
            && self.tags.is_empty()
    }
}

/// The three categorical attributes a facility can be filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterAttr {
    Author,
    Category,
    Region,
}

impl FilterAttr {
    pub const ALL: [FilterAttr; 3] = [FilterAttr::Author, FilterAttr::Category, FilterAttr::Region];
}

/// Normalizes an empty categorical value to the fixed placeholder label.
/// Applied at comparison and display time only; records keep the raw value.
pub fn display_or_unselected(value: &str) -> &str {
    if value.is_empty() {
        UNSELECTED
    } else {
        value
    }
}

/// Formats a coordinate without unnecessary decimal places.
fn format_coord(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{:.0}", n)
    } else {
        format!("{}", n)
    }
}
