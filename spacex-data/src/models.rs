//! Record and selection types shared by the loader, layout and chart handlers.
//!
//! Column names in the serde attributes match the headers of
//! `spacex_launch_dash.csv` exactly.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dropdown value meaning "aggregate across every launch site".
pub const ALL_SITES: &str = "All Sites";

/// One launch attempt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LaunchRecord {
    #[serde(rename = "Launch Site")]
    pub launch_site: String,
    /// Payload mass in kilograms.
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    #[serde(rename = "Booster Version Category")]
    pub booster_version_category: String,
    /// Outcome class: 1 = success, 0 = failure.
    #[serde(rename = "class")]
    pub class: u8,
    /// Full booster version (e.g. "F9 v1.1 B1011"), used as hover text.
    #[serde(rename = "Booster Version", default)]
    pub booster_version: Option<String>,
}

impl LaunchRecord {
    pub fn is_success(&self) -> bool {
        self.class == 1
    }
}

/// A closed payload interval `[lo, hi]` in kilograms.
///
/// Only constructible with finite bounds and `lo <= hi`. Serializes as a
/// two-element array, the shape a range slider value takes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "[f64; 2]")]
pub struct PayloadRange {
    lo: f64,
    hi: f64,
}

impl PayloadRange {
    pub fn new(lo: f64, hi: f64) -> Option<Self> {
        (lo.is_finite() && hi.is_finite() && lo <= hi).then_some(Self { lo, hi })
    }

    pub fn lo(&self) -> f64 {
        self.lo
    }

    pub fn hi(&self) -> f64 {
        self.hi
    }

    /// Inclusive on both ends.
    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.lo <= payload_mass_kg && payload_mass_kg <= self.hi
    }
}

impl From<PayloadRange> for [f64; 2] {
    fn from(range: PayloadRange) -> Self {
        [range.lo, range.hi]
    }
}

impl fmt::Display for PayloadRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}] kg", self.lo, self.hi)
    }
}

/// The current launch-site dropdown value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SiteSelection {
    /// The "All Sites" sentinel
    AllSites,
    /// A concrete launch site name
    Site(String),
}

impl SiteSelection {
    /// Interpret a raw dropdown value; the sentinel string maps to `AllSites`.
    pub fn from_value(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::AllSites
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SiteSelection::AllSites => ALL_SITES,
            SiteSelection::Site(site) => site,
        }
    }

    /// True if a record from `launch_site` belongs to this selection.
    pub fn matches(&self, launch_site: &str) -> bool {
        match self {
            SiteSelection::AllSites => true,
            SiteSelection::Site(site) => site == launch_site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Successful launch count for one site.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SiteSuccess {
    pub site: String,
    /// Sum of the outcome class over the site's rows.
    pub successes: u32,
}

/// Success and failure counts for one site.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct OutcomeCounts {
    pub success: u32,
    pub failure: u32,
}

impl OutcomeCounts {
    pub fn total(&self) -> u32 {
        self.success + self.failure
    }
}
