//! Report entity - Entries in the generated-reports catalog.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::store::Record;

/// Area a report covers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportKind {
    /// Income and expenses
    Financial,
    /// Member directory
    Members,
    /// Staff roster
    Staff,
    /// Event calendar
    Events,
}

impl ReportKind {
    /// Every report kind, in display order
    pub const ALL: [Self; 4] = [Self::Financial, Self::Members, Self::Staff, Self::Events];

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Financial => "Financial",
            Self::Members => "Members",
            Self::Staff => "Staff",
            Self::Events => "Events",
        }
    }
}

/// A stored report catalog entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Unique within the reports collection
    pub id: i64,
    /// Title, e.g. "Financial Report"
    pub name: String,
    /// Day the report was generated
    pub generated_date: NaiveDate,
    /// Area covered
    #[serde(rename = "type")]
    pub kind: ReportKind,
    /// Covered period, e.g. "June 2024"
    pub period: String,
    /// Size of the source data at generation time
    pub size_bytes: u64,
}

impl Report {
    /// Human-readable size, e.g. `"1.2 KB"`
    #[must_use]
    pub fn formatted_size(&self) -> String {
        // Cast safety: sizes are far below 2^52, precision loss is irrelevant for display.
        #[allow(clippy::cast_precision_loss)]
        let bytes = self.size_bytes as f64;
        if bytes >= 1024.0 * 1024.0 {
            format!("{:.1} MB", bytes / (1024.0 * 1024.0))
        } else if bytes >= 1024.0 {
            format!("{:.1} KB", bytes / 1024.0)
        } else {
            format!("{} B", self.size_bytes)
        }
    }
}

impl Record for Report {
    fn id(&self) -> i64 {
        self.id
    }
}
