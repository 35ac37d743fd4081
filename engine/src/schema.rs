//! FILENAME: engine/src/schema.rs
//! PURPOSE: Maps tokenized rows onto typed `Facility` records.
//! CONTEXT: The header row is resolved against the fixed logical column
//! names of the source sheet; column order is irrelevant and any subset may
//! be present. Every anomaly degrades to an absent field: a missing column,
//! a ragged row, or a non-numeric coordinate cell never fails the parse.

use crate::record::Facility;
use parser::Row;

// ============================================================================
// LOGICAL COLUMN NAMES (Japanese headers of the source sheet)
// ============================================================================

pub const COL_NAME: &str = "施設名";
pub const COL_AUTHOR: &str = "作成者";
pub const COL_CATEGORY: &str = "タイプ";
pub const COL_REGION: &str = "地域(任意)";
pub const COL_X: &str = "x座標";
pub const COL_Y: &str = "y座標(任意)";
pub const COL_Z: &str = "z座標";
pub const COL_DESCRIPTION: &str = "説明";
pub const COL_TAGS: &str = "タグ(,区切り)";

// ============================================================================
// COLUMN MAP
// ============================================================================

/// Resolved position of each logical column in the source header.
/// `None` means the column is absent from the document; every record then
/// gets the absent/empty value for that field.
#[derive(Debug, Clone, Default)]
pub struct ColumnMap {
    pub name: Option<usize>,
    pub author: Option<usize>,
    pub category: Option<usize>,
    pub region: Option<usize>,
    pub x: Option<usize>,
    pub y: Option<usize>,
    pub z: Option<usize>,
    pub description: Option<usize>,
    pub tags: Option<usize>,
}

impl ColumnMap {
    /// Resolves the header row. Cells are trimmed and a leading UTF-8 BOM
    /// is stripped before matching, so a document exported with a byte
    /// order mark maps identically to one without.
    pub fn from_header(header: &Row) -> Self {
        let cells: Vec<&str> = header
            .iter()
            .map(|cell| cell.strip_prefix('\u{feff}').unwrap_or(cell).trim())
            .collect();

        let find = |name: &str| cells.iter().position(|c| *c == name);

        ColumnMap {
            name: find(COL_NAME),
            author: find(COL_AUTHOR),
            category: find(COL_CATEGORY),
            region: find(COL_REGION),
            x: find(COL_X),
            y: find(COL_Y),
            z: find(COL_Z),
            description: find(COL_DESCRIPTION),
            tags: find(COL_TAGS),
        }
    }

    /// List of recognized columns missing from the header, for diagnostics.
    pub fn missing_columns(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        let mut check = |idx: Option<usize>, name: &'static str| {
            if idx.is_none() {
                missing.push(name);
            }
        };
        check(self.name, COL_NAME);
        check(self.author, COL_AUTHOR);
        check(self.category, COL_CATEGORY);
        check(self.region, COL_REGION);
        check(self.x, COL_X);
        check(self.y, COL_Y);
        check(self.z, COL_Z);
        check(self.description, COL_DESCRIPTION);
        check(self.tags, COL_TAGS);
        missing
    }

    /// Maps one data row to a record. Ragged rows are tolerated: a cell
    /// beyond the end of the row reads as empty.
    pub fn map_row(&self, row: &Row) -> Facility {
        let cell = |idx: Option<usize>| -> &str {
            idx.and_then(|i| row.get(i))
                .map(String::as_str)
                .unwrap_or("")
                .trim()
        };

        Facility {
            name: cell(self.name).to_string(),
            author: cell(self.author).to_string(),
            category: cell(self.category).to_string(),
            region: cell(self.region).to_string(),
            x: parse_number(cell(self.x)),
            y: parse_number(cell(self.y)),
            z: parse_number(cell(self.z)),
            description: cell(self.description).to_string(),
            tags: split_tags(cell(self.tags)),
        }
    }
}

// ============================================================================
// ROW MAPPING
// ============================================================================

/// Maps tokenized rows onto records. The first row is the header; records
/// whose every mapped field is empty are dropped.
pub fn map_rows(rows: &[Row]) -> Vec<Facility> {
    let Some((header, body)) = rows.split_first() else {
        return Vec::new();
    };
    let map = ColumnMap::from_header(header);

    body.iter()
        .map(|row| map.map_row(row))
        .filter(|facility| !facility.is_blank())
        .collect()
}

/// Best-effort numeric coercion: empty after trim is absent, and anything
/// that does not parse to a finite number is absent. Never zero.
pub fn parse_number(cell: &str) -> Option<f64> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => Some(n),
        _ => None,
    }
}

/// Splits a tag cell on commas, trimming each piece and discarding empties.
/// Order is preserved.
fn split_tags(cell: &str) -> Vec<String> {
    if cell.is_empty() {
        return Vec::new();
    }
    cell.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> Row {
        vec![
            COL_NAME.to_string(),
            COL_AUTHOR.to_string(),
            COL_CATEGORY.to_string(),
            COL_REGION.to_string(),
            COL_X.to_string(),
            COL_Y.to_string(),
            COL_Z.to_string(),
            COL_DESCRIPTION.to_string(),
            COL_TAGS.to_string(),
        ]
    }

    fn row(cells: &[&str]) -> Row {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn maps_a_full_row() {
        let rows = vec![
            header(),
            row(&["拠点", "alice", "farm", "north", "100", "64", "-200", "desc", "a, b"]),
        ];
        let facilities = map_rows(&rows);
        assert_eq!(facilities.len(), 1);
        let f = &facilities[0];
        assert_eq!(f.name, "拠点");
        assert_eq!(f.author, "alice");
        assert_eq!(f.x, Some(100.0));
        assert_eq!(f.y, Some(64.0));
        assert_eq!(f.z, Some(-200.0));
        assert_eq!(f.tags, vec!["a", "b"]);
    }

    #[test]
    fn header_bom_is_stripped_before_matching() {
        let mut with_bom = header();
        with_bom[0] = format!("\u{feff}{}", COL_NAME);
        let rows = vec![with_bom, row(&["拠点", "", "", "", "", "", "", "", ""])];
        let facilities = map_rows(&rows);
        assert_eq!(facilities.len(), 1);
        assert_eq!(facilities[0].name, "拠点");
    }

    #[test]
    fn column_order_is_irrelevant() {
        let rows = vec![
            vec![COL_Z.to_string(), COL_NAME.to_string()],
            row(&["-32", "倉庫"]),
        ];
        let facilities = map_rows(&rows);
        assert_eq!(facilities[0].name, "倉庫");
        assert_eq!(facilities[0].z, Some(-32.0));
        assert_eq!(facilities[0].x, None);
    }

    #[test]
    fn missing_column_yields_absent_for_every_record() {
        let rows = vec![
            vec![COL_NAME.to_string()],
            row(&["拠点"]),
        ];
        let facilities = map_rows(&rows);
        assert_eq!(facilities[0].y, None);
        assert_eq!(facilities[0].author, "");
        assert!(facilities[0].tags.is_empty());
    }

    #[test]
    fn ragged_rows_read_missing_cells_as_empty() {
        let rows = vec![header(), row(&["拠点", "alice"])];
        let facilities = map_rows(&rows);
        assert_eq!(facilities.len(), 1);
        assert_eq!(facilities[0].x, None);
        assert_eq!(facilities[0].description, "");
    }

    #[test]
    fn numeric_coercion_never_errors_and_never_zeroes() {
        assert_eq!(parse_number(" 12.5 "), Some(12.5));
        assert_eq!(parse_number("-3"), Some(-3.0));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("   "), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
    }

    #[test]
    fn tags_are_trimmed_and_empties_dropped() {
        let rows = vec![
            vec![COL_NAME.to_string(), COL_TAGS.to_string()],
            row(&["拠点", " a , , b ,c,"]),
        ];
        let facilities = map_rows(&rows);
        assert_eq!(facilities[0].tags, vec!["a", "b", "c"]);
    }

    #[test]
    fn fully_blank_rows_are_dropped() {
        let rows = vec![
            header(),
            row(&["拠点", "", "", "", "", "", "", "", ""]),
            row(&["", "  ", "", "", "", " ", "", "", ""]),
        ];
        let facilities = map_rows(&rows);
        assert_eq!(facilities.len(), 1);
    }

    #[test]
    fn missing_columns_are_reported() {
        let map = ColumnMap::from_header(&vec![COL_NAME.to_string()]);
        let missing = map.missing_columns();
        assert!(missing.contains(&COL_AUTHOR));
        assert!(!missing.contains(&COL_NAME));
    }
}
