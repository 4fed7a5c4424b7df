//! Core domain models for the PowerGrid outage manager.
pub mod dashboard;
pub mod district;
pub mod prediction;
pub mod report;
pub mod roster;
pub mod view;

pub use dashboard::DashboardStats;
pub use district::District;
pub use prediction::{Prediction, default_predictions};
pub use report::{
    IdAssignment, Priority, Report, ReportDraft, ReportError, ReportStatus, ReportStore,
    format_reported_at,
};
pub use roster::{Technician, TechnicianStatus, default_roster};
pub use view::{View, ViewController};
