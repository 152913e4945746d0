//! Read-side queries over the launch table.
//!
//! Grouping results are returned as owned, serializable structs from
//! [`crate::models`]; row selections borrow from the table.

use crate::models::{LaunchRecord, OutcomeCounts, PayloadRange, SiteSelection, SiteSuccess};
use crate::LaunchTable;
use std::collections::{BTreeMap, HashMap};

impl LaunchTable {
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a loaded table; kept for the `len` convention.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Observed (min, max) payload mass, computed once at load.
    pub fn payload_bounds(&self) -> PayloadRange {
        self.payload_bounds
    }

    /// Whether any row was launched from `site`.
    pub fn has_site(&self, site: &str) -> bool {
        self.records.iter().any(|r| r.launch_site == site)
    }

    /// Distinct launch sites, most frequent first.
    ///
    /// Sites with the same number of launches keep the order in which they
    /// first appear in the table.
    pub fn sites_by_frequency(&self) -> Vec<String> {
        let mut counts: Vec<(&str, usize)> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();
        for record in &self.records {
            match index.get(record.launch_site.as_str()) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(record.launch_site.as_str(), counts.len());
                    counts.push((record.launch_site.as_str(), 1));
                }
            }
        }
        // Stable sort keeps first-seen order among ties.
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.into_iter().map(|(site, _)| site.to_string()).collect()
    }

    /// Rows belonging to `selection`, in table order.
    pub fn rows_for<'a>(
        &'a self,
        selection: &'a SiteSelection,
    ) -> impl Iterator<Item = &'a LaunchRecord> + 'a {
        self.records
            .iter()
            .filter(move |r| selection.matches(&r.launch_site))
    }

    /// Rows belonging to `selection` whose payload lies in `range`.
    ///
    /// Both bounds are tested against the same site-filtered row.
    pub fn rows_in_payload_range<'a>(
        &'a self,
        selection: &'a SiteSelection,
        range: PayloadRange,
    ) -> impl Iterator<Item = &'a LaunchRecord> + 'a {
        self.rows_for(selection)
            .filter(move |r| range.contains(r.payload_mass_kg))
    }

    /// Sum of the outcome class per site, ordered by site name.
    pub fn success_by_site(&self) -> Vec<SiteSuccess> {
        let mut sums: BTreeMap<&str, u32> = BTreeMap::new();
        for record in &self.records {
            *sums.entry(record.launch_site.as_str()).or_default() += u32::from(record.class);
        }
        sums.into_iter()
            .map(|(site, successes)| SiteSuccess {
                site: site.to_string(),
                successes,
            })
            .collect()
    }

    /// Success and failure counts for one site. Unknown sites count zero.
    pub fn outcome_counts(&self, site: &str) -> OutcomeCounts {
        self.records
            .iter()
            .filter(|r| r.launch_site == site)
            .fold(OutcomeCounts::default(), |mut counts, r| {
                if r.is_success() {
                    counts.success += 1;
                } else {
                    counts.failure += 1;
                }
                counts
            })
    }
}

#[cfg(test)]
mod tests {
    use crate::{LaunchTable, PayloadRange, SiteSelection};

    fn fixture() -> LaunchTable {
        LaunchTable::from_csv_str(
            "\
Launch Site,Payload Mass (kg),Booster Version Category,class
B,500,v1.0,0
A,2000,v1.1,1
A,3000,FT,0
C,4000,FT,1
B,5000,B4,0
A,6000,B4,1
",
        )
        .unwrap()
    }

    #[test]
    fn sites_ordered_by_frequency_then_first_seen() {
        let table = fixture();
        assert_eq!(table.sites_by_frequency(), vec!["A", "B", "C"]);

        let tied = LaunchTable::from_csv_str(
            "\
Launch Site,Payload Mass (kg),Booster Version Category,class
Z,1,FT,1
Y,2,FT,1
Z,3,FT,0
Y,4,FT,0
",
        )
        .unwrap();
        assert_eq!(tied.sites_by_frequency(), vec!["Z", "Y"]);
    }

    #[test]
    fn success_by_site_sums_class_in_name_order() {
        let sums = fixture().success_by_site();
        let pairs: Vec<(&str, u32)> = sums.iter().map(|s| (s.site.as_str(), s.successes)).collect();
        assert_eq!(pairs, vec![("A", 2), ("B", 0), ("C", 1)]);
    }

    #[test]
    fn outcome_counts_per_site() {
        let table = fixture();
        let a = table.outcome_counts("A");
        assert_eq!((a.success, a.failure), (2, 1));
        assert_eq!(table.outcome_counts("nowhere").total(), 0);
    }

    #[test]
    fn payload_range_applies_to_site_subset() {
        let table = fixture();
        let site = SiteSelection::Site("A".to_string());
        let range = PayloadRange::new(2500.0, 6000.0).unwrap();
        let masses: Vec<f64> = table
            .rows_in_payload_range(&site, range)
            .map(|r| r.payload_mass_kg)
            .collect();
        assert_eq!(masses, vec![3000.0, 6000.0]);
    }

    #[test]
    fn has_site() {
        let table = fixture();
        assert!(table.has_site("C"));
        assert!(!table.has_site("All Sites"));
    }
}
