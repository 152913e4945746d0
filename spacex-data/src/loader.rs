//! CSV loading for the launch record table.
//!
//! # CSV Format
//!
//! Headers are required. The launch file as published carries an unnamed
//! index column and a few extra columns:
//!
//! ```text
//! ,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
//! 0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
//! ```
//!
//! Only the columns in [`REQUIRED_COLUMNS`] must be present, in any order.

use crate::error::{DataLoadError, Result};
use crate::models::LaunchRecord;
use crate::LaunchTable;
use std::fs;
use std::path::Path;

/// Headers that must be present in the launch CSV.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    "Launch Site",
    "Payload Mass (kg)",
    "Booster Version Category",
    "class",
];

impl LaunchTable {
    /// Read and parse the launch CSV at `path`.
    ///
    /// An absent or unreadable file is reported as [`DataLoadError::Io`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let csv_data = fs::read_to_string(path).map_err(|source| DataLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loader: read {} bytes from {}", csv_data.len(), path.display());
        Self::from_csv_str(&csv_data)
    }

    /// Parse launch records from CSV text with headers.
    pub fn from_csv_str(csv_data: &str) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(csv_data.as_bytes());

        let headers = rdr.headers()?.clone();
        if let Some(missing) = REQUIRED_COLUMNS
            .iter()
            .find(|column| !headers.iter().any(|h| h == **column))
        {
            return Err(DataLoadError::MissingColumn(*missing));
        }

        let mut records = Vec::new();
        for result in rdr.records() {
            let row = result?;
            let line = row.position().map(|p| p.line()).unwrap_or(0);

            let record: LaunchRecord =
                row.deserialize(Some(&headers))
                    .map_err(|e| DataLoadError::MalformedRow {
                        line,
                        reason: e.to_string(),
                    })?;

            if record.class > 1 {
                return Err(DataLoadError::MalformedRow {
                    line,
                    reason: format!("class must be 0 or 1, found {}", record.class),
                });
            }
            if !record.payload_mass_kg.is_finite() {
                return Err(DataLoadError::MalformedRow {
                    line,
                    reason: format!("payload mass is not finite: {}", record.payload_mass_kg),
                });
            }

            records.push(record);
        }

        let table = Self::from_records(records)?;
        log::info!(
            "loader: Loaded {} launch records, payload bounds {}",
            table.len(),
            table.payload_bounds()
        );
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use crate::{DataLoadError, LaunchTable};
    use std::io::Write;

    const PUBLISHED_LAYOUT: &str = "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,2,CCAFS LC-40,0,0.0,F9 v1.0  B0004,v1.0
2,3,CCAFS LC-40,0,525.0,F9 v1.0  B0005,v1.0
3,4,VAFB SLC-4E,0,500.0,F9 v1.1  B1003,v1.1
4,5,KSC LC-39A,1,5300.0,F9 FT B1031.1,FT
";

    #[test]
    fn load_published_layout() {
        let table = LaunchTable::from_csv_str(PUBLISHED_LAYOUT).unwrap();
        assert_eq!(table.len(), 5);

        let first = &table.records()[0];
        assert_eq!(first.launch_site, "CCAFS LC-40");
        assert_eq!(first.booster_version_category, "v1.0");
        assert_eq!(first.booster_version.as_deref(), Some("F9 v1.0  B0003"));

        assert_eq!(table.payload_bounds().lo(), 0.0);
        assert_eq!(table.payload_bounds().hi(), 5300.0);
    }

    #[test]
    fn load_minimal_columns_in_any_order() {
        let csv = "\
class,Booster Version Category,Payload Mass (kg),Launch Site
1,FT,3600,KSC LC-39A
0,B4,9600,VAFB SLC-4E
";
        let table = LaunchTable::from_csv_str(csv).unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.records()[0].booster_version.is_none());
        assert!(table.records()[0].is_success());
    }

    #[test]
    fn load_reports_missing_column() {
        let csv = "\
Launch Site,Payload Mass (kg),class
CCAFS LC-40,500,1
";
        let err = LaunchTable::from_csv_str(csv).unwrap_err();
        assert!(
            matches!(err, DataLoadError::MissingColumn("Booster Version Category")),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn load_reports_non_numeric_payload() {
        let csv = "\
Launch Site,Payload Mass (kg),Booster Version Category,class
CCAFS LC-40,500,v1.0,1
CCAFS LC-40,heavy,v1.0,1
";
        let err = LaunchTable::from_csv_str(csv).unwrap_err();
        match err {
            DataLoadError::MalformedRow { line, .. } => assert_eq!(line, 3),
            other => panic!("expected MalformedRow, got {other}"),
        }
    }

    #[test]
    fn load_rejects_class_outside_binary() {
        let csv = "\
Launch Site,Payload Mass (kg),Booster Version Category,class
CCAFS LC-40,500,v1.0,2
";
        let err = LaunchTable::from_csv_str(csv).unwrap_err();
        assert!(matches!(err, DataLoadError::MalformedRow { .. }));
    }

    #[test]
    fn load_headers_only_is_empty() {
        let csv = "Launch Site,Payload Mass (kg),Booster Version Category,class\n";
        let err = LaunchTable::from_csv_str(csv).unwrap_err();
        assert!(matches!(err, DataLoadError::Empty));
    }

    #[test]
    fn load_from_missing_path_is_io_error() {
        let err = LaunchTable::from_path("does/not/exist/spacex_launch_dash.csv").unwrap_err();
        assert!(matches!(err, DataLoadError::Io { .. }));
        assert!(err.to_string().contains("spacex_launch_dash.csv"));
    }

    #[test]
    fn io_error_keeps_cause_out_of_message() {
        use std::error::Error;
        let err = LaunchTable::from_path("does/not/exist/spacex_launch_dash.csv").unwrap_err();
        let cause = err.source().unwrap().to_string();
        assert!(!err.to_string().contains(&cause));
    }

    #[test]
    fn load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(PUBLISHED_LAYOUT.as_bytes()).unwrap();
        let table = LaunchTable::from_path(file.path()).unwrap();
        assert_eq!(table.len(), 5);
    }
}
