//! FILENAME: engine/src/lib.rs
//! PURPOSE: Main library entry point for the facility data engine.
//! CONTEXT: Re-exports the record model, schema mapper, collation, and
//! coordinate transform for use by other crates.

pub mod collation;
pub mod coord;
pub mod record;
pub mod schema;

// Re-export commonly used types at the crate root
pub use collation::{BaseStrengthCollation, Collation};
pub use coord::{to_nether, NetherCoord, NETHER_SCALE};
pub use record::{display_or_unselected, Facility, FilterAttr, UNNAMED, UNSELECTED};
pub use schema::{map_rows, parse_number, ColumnMap};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_maps_tokenized_rows_to_records() {
        let text = format!("{},{}\nスポーン,alice\n", schema::COL_NAME, schema::COL_AUTHOR);
        let rows = parser::tokenize(&text);
        let facilities = map_rows(&rows);

        assert_eq!(facilities.len(), 1);
        assert_eq!(facilities[0].name, "スポーン");
        assert_eq!(facilities[0].author, "alice");
        assert_eq!(facilities[0].x, None);
    }

    #[test]
    fn records_round_trip_through_json() {
        let f = Facility {
            name: "拠点".to_string(),
            x: Some(100.0),
            tags: vec!["farm".to_string()],
            ..Facility::default()
        };

        let json = serde_json::to_string(&f).unwrap();
        let back: Facility = serde_json::from_str(&json).unwrap();
        assert_eq!(back, f);
    }

    #[test]
    fn absent_coordinates_stay_absent_through_the_transform() {
        let f = Facility {
            z: Some(40.0),
            ..Facility::default()
        };
        assert_eq!(to_nether(f.x, f.z), None);
    }
}
