mod store;

pub use store::{IdAssignment, ReportStore};

use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt;
use thiserror::Error;

use crate::District;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A power-outage complaint filed by a customer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Report {
    pub id: u32,
    pub name: String,
    pub phone: String,
    pub area: District,
    pub address: String,
    pub description: String,
    pub status: ReportStatus,
    pub priority: Priority,
    pub timestamp: DateTime<Utc>,
}

/// Where a report sits in the repair workflow. Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ReportStatus {
    Pending,
    Assigned,
    Completed,
}

impl ReportStatus {
    /// The status this one advances to, or `None` once completed.
    pub fn next(&self) -> Option<ReportStatus> {
        match self {
            ReportStatus::Pending => Some(ReportStatus::Assigned),
            ReportStatus::Assigned => Some(ReportStatus::Completed),
            ReportStatus::Completed => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "Pending",
            ReportStatus::Assigned => "Assigned",
            ReportStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

/// In-progress form values before a report is submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReportDraft {
    pub name: String,
    pub phone: String,
    pub area: Option<District>,
    pub address: String,
    pub description: String,
}

impl ReportDraft {
    /// Whether every field has been filled in.
    ///
    /// Text fields only need to be non-empty; whitespace counts as input.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.phone.is_empty()
            && self.area.is_some()
            && !self.address.is_empty()
            && !self.description.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self == &ReportDraft::default()
    }

    pub fn clear(&mut self) {
        *self = ReportDraft::default();
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ReportError {
    #[error("Please fill in all fields")]
    IncompleteDraft,
    #[error("Report #{0} not found")]
    ReportNotFound(u32),
    #[error("Report #{id} is {from}, it cannot be moved to {to}")]
    InvalidTransition {
        id: u32,
        from: ReportStatus,
        to: ReportStatus,
    },
    #[error("No report ids left to assign")]
    IdsExhausted,
    #[error("Unknown district: {0}")]
    UnknownDistrict(String),
}

/// Formats a report timestamp as a 12-hour local clock time, e.g. `02:05 PM`.
pub fn format_reported_at(timestamp: &DateTime<Utc>) -> String {
    format_time_of_day(&timestamp.with_timezone(&Local))
}

fn format_time_of_day<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    timestamp.format("%I:%M %p").to_string()
}
