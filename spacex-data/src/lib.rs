//! In-memory launch record table for the SpaceX launch dashboard.
//!
//! The table is loaded once at startup from `spacex_launch_dash.csv` and is
//! never written to afterwards. Consumers share it behind an `Arc` and only
//! use the read-side query methods.
//!
//! # Usage
//!
//! ```rust
//! use spacex_data::LaunchTable;
//!
//! let table = LaunchTable::from_csv_str(
//!     "Launch Site,Payload Mass (kg),Booster Version Category,class\n\
//!      CCAFS LC-40,500,v1.0,1\n\
//!      KSC LC-39A,5300,FT,0\n",
//! )
//! .unwrap();
//!
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.payload_bounds().lo(), 500.0);
//! assert_eq!(table.payload_bounds().hi(), 5300.0);
//! ```
//!
//! # Columns
//!
//! See [`loader::REQUIRED_COLUMNS`]. Any other column is ignored except
//! `Booster Version`, which is kept for hover text when present.

pub mod error;
pub mod loader;
pub mod models;
mod queries;

pub use error::DataLoadError;
pub use models::{LaunchRecord, OutcomeCounts, PayloadRange, SiteSelection, SiteSuccess, ALL_SITES};

/// Immutable table of launch records plus the payload bounds observed at load.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchTable {
    records: Vec<LaunchRecord>,
    payload_bounds: PayloadRange,
}

impl LaunchTable {
    /// Build a table from already-parsed records.
    ///
    /// Computes the payload (min, max) once. Fails with
    /// [`DataLoadError::Empty`] when there are no records.
    pub fn from_records(records: Vec<LaunchRecord>) -> error::Result<Self> {
        let mut bounds: Option<(f64, f64)> = None;
        for record in &records {
            let mass = record.payload_mass_kg;
            bounds = Some(match bounds {
                None => (mass, mass),
                Some((lo, hi)) => (lo.min(mass), hi.max(mass)),
            });
        }

        let (lo, hi) = bounds.ok_or(DataLoadError::Empty)?;
        let payload_bounds = PayloadRange::new(lo, hi).ok_or_else(|| DataLoadError::MalformedRow {
            line: 0,
            reason: "payload mass column contains non-finite values".to_string(),
        })?;

        Ok(Self {
            records,
            payload_bounds,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(site: &str, mass: f64, class: u8) -> LaunchRecord {
        LaunchRecord {
            launch_site: site.to_string(),
            payload_mass_kg: mass,
            booster_version_category: "FT".to_string(),
            class,
            booster_version: None,
        }
    }

    #[test]
    fn table_computes_payload_bounds() {
        let table = LaunchTable::from_records(vec![
            record("A", 2500.0, 1),
            record("B", 0.0, 0),
            record("A", 9600.0, 1),
        ])
        .unwrap();
        assert_eq!(table.payload_bounds().lo(), 0.0);
        assert_eq!(table.payload_bounds().hi(), 9600.0);
    }

    #[test]
    fn table_rejects_no_records() {
        let err = LaunchTable::from_records(Vec::new()).unwrap_err();
        assert!(matches!(err, DataLoadError::Empty));
    }

    #[test]
    fn table_is_cloneable_and_equal() {
        let table = LaunchTable::from_records(vec![record("A", 100.0, 1)]).unwrap();
        let copy = table.clone();
        assert_eq!(table, copy);
    }
}
