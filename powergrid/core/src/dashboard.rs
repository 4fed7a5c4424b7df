use crate::{ReportStatus, ReportStore, Technician};

/// Counts shown on the admin dashboard. Recomputed on every read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total: usize,
    pub pending: usize,
    /// Every completed report. Not filtered by date despite the "today" label.
    pub resolved_today: usize,
    pub available_technicians: usize,
}

impl DashboardStats {
    pub fn compute(store: &ReportStore, roster: &[Technician]) -> Self {
        Self {
            total: store.len(),
            pending: store.count_with_status(ReportStatus::Pending),
            resolved_today: store.count_with_status(ReportStatus::Completed),
            available_technicians: roster.iter().filter(|t| t.is_available()).count(),
        }
    }
}
