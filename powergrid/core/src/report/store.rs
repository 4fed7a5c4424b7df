use chrono::{DateTime, Duration, Utc};

use super::{Priority, Report, ReportDraft, ReportError, ReportStatus};
use crate::District;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a new report's id is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum IdAssignment {
    /// Collection length + 1. Collides with an existing id if reports are ever removed.
    CollectionLength,
    /// A counter that starts after the highest known id and only ever increases.
    #[default]
    Monotonic,
}

/// Ordered collection of reports, newest first.
///
/// Reports are only ever prepended or have their status advanced; nothing is removed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReportStore {
    reports: Vec<Report>,
    /// `None` once every `u32` id has been handed out.
    next_id: Option<u32>,
    id_assignment: IdAssignment,
}

impl Default for ReportStore {
    fn default() -> Self {
        Self::new(IdAssignment::default())
    }
}

impl ReportStore {
    pub fn new(id_assignment: IdAssignment) -> Self {
        Self {
            reports: Vec::new(),
            next_id: Some(1),
            id_assignment,
        }
    }

    /// Builds a store from existing reports, kept in the given order.
    pub fn from_reports(reports: Vec<Report>, id_assignment: IdAssignment) -> Self {
        let next_id = reports
            .iter()
            .map(|r| r.id)
            .max()
            .map_or(Some(1), |max| max.checked_add(1));
        Self {
            reports,
            next_id,
            id_assignment,
        }
    }

    /// A store holding the two sample complaints, timestamped relative to `now`.
    pub fn seeded(now: DateTime<Utc>, id_assignment: IdAssignment) -> Self {
        Self::from_reports(sample_reports(now), id_assignment)
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub fn get(&self, id: u32) -> Option<&Report> {
        self.reports.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn id_assignment(&self) -> IdAssignment {
        self.id_assignment
    }

    pub fn count_with_status(&self, status: ReportStatus) -> usize {
        self.reports.iter().filter(|r| r.status == status).count()
    }

    /// Submits the draft as a new pending report stamped with the current time.
    pub fn submit(&mut self, draft: &mut ReportDraft) -> Result<&Report, ReportError> {
        self.submit_at(draft, Utc::now())
    }

    /// Turns a complete draft into a new report at the front of the collection
    /// and clears the draft.
    ///
    /// An incomplete draft, or a store with no ids left, is rejected and neither
    /// the store nor the draft change.
    pub fn submit_at(
        &mut self,
        draft: &mut ReportDraft,
        at: DateTime<Utc>,
    ) -> Result<&Report, ReportError> {
        let Some(area) = draft.area.filter(|_| draft.is_complete()) else {
            return Err(ReportError::IncompleteDraft);
        };
        let id = self.allocate_id()?;
        let ReportDraft {
            name,
            phone,
            address,
            description,
            ..
        } = std::mem::take(draft);

        self.reports.insert(
            0,
            Report {
                id,
                name,
                phone,
                area,
                address,
                description,
                status: ReportStatus::Pending,
                priority: Priority::Medium,
                timestamp: at,
            },
        );
        Ok(&self.reports[0])
    }

    /// Moves a pending report to assigned.
    pub fn assign(&mut self, id: u32) -> Result<&Report, ReportError> {
        self.advance(id, ReportStatus::Pending, ReportStatus::Assigned)
    }

    /// Moves an assigned report to completed.
    pub fn complete(&mut self, id: u32) -> Result<&Report, ReportError> {
        self.advance(id, ReportStatus::Assigned, ReportStatus::Completed)
    }

    fn advance(
        &mut self,
        id: u32,
        from: ReportStatus,
        to: ReportStatus,
    ) -> Result<&Report, ReportError> {
        let index = self
            .reports
            .iter()
            .position(|r| r.id == id)
            .ok_or(ReportError::ReportNotFound(id))?;

        let report = &mut self.reports[index];
        if report.status != from {
            return Err(ReportError::InvalidTransition {
                id,
                from: report.status,
                to,
            });
        }
        report.status = to;

        Ok(&self.reports[index])
    }

    fn allocate_id(&mut self) -> Result<u32, ReportError> {
        let id = match self.id_assignment {
            IdAssignment::CollectionLength => u32::try_from(self.reports.len())
                .ok()
                .and_then(|len| len.checked_add(1)),
            IdAssignment::Monotonic => self.next_id,
        }
        .ok_or(ReportError::IdsExhausted)?;

        if self.next_id.is_some_and(|next| next <= id) {
            self.next_id = id.checked_add(1);
        }
        Ok(id)
    }
}

fn sample_reports(now: DateTime<Utc>) -> Vec<Report> {
    vec![
        Report {
            id: 1,
            name: "John Doe".to_string(),
            phone: "+234-801-234-5678".to_string(),
            area: District::VictoriaIsland,
            address: "15 Ahmadu Bello Way".to_string(),
            description: "Complete power outage since 2 PM".to_string(),
            status: ReportStatus::Pending,
            priority: Priority::High,
            timestamp: now - Duration::hours(2),
        },
        Report {
            id: 2,
            name: "Sarah Ahmed".to_string(),
            phone: "+234-802-345-6789".to_string(),
            area: District::Ikeja,
            address: "42 Allen Avenue".to_string(),
            description: "Frequent power fluctuations damaging appliances".to_string(),
            status: ReportStatus::Assigned,
            priority: Priority::Medium,
            timestamp: now - Duration::hours(4),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 8, 15, 16, 0, 0).unwrap()
    }

    fn draft(name: &str) -> ReportDraft {
        ReportDraft {
            name: name.to_string(),
            phone: "1".to_string(),
            area: Some(District::Yaba),
            address: "X".to_string(),
            description: "Y".to_string(),
        }
    }

    #[test]
    fn new_store_is_empty() {
        let store = ReportStore::default();

        assert!(store.is_empty());
        assert_eq!(store.id_assignment(), IdAssignment::Monotonic);
    }

    #[test]
    fn seeded_store_holds_sample_complaints() {
        let store = ReportStore::seeded(now(), IdAssignment::Monotonic);

        let ids: Vec<u32> = store.reports().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);

        let first = &store.reports()[0];
        assert_eq!(first.name, "John Doe");
        assert_eq!(first.status, ReportStatus::Pending);
        assert_eq!(first.priority, Priority::High);
        assert_eq!(first.timestamp, now() - Duration::hours(2));

        let second = &store.reports()[1];
        assert_eq!(second.area, District::Ikeja);
        assert_eq!(second.status, ReportStatus::Assigned);
        assert_eq!(second.timestamp, now() - Duration::hours(4));
    }

    #[test]
    fn submit_prepends_pending_medium_report_and_clears_draft() {
        let mut store = ReportStore::seeded(now(), IdAssignment::Monotonic);
        let mut draft = draft("A");

        let report = store.submit_at(&mut draft, now()).unwrap().clone();

        assert_eq!(report.id, 3);
        assert_eq!(report.status, ReportStatus::Pending);
        assert_eq!(report.priority, Priority::Medium);
        assert_eq!(report.timestamp, now());
        assert_eq!(report.area, District::Yaba);
        assert_eq!(store.len(), 3);
        assert_eq!(store.reports()[0], report);
        assert!(draft.is_empty());
    }

    #[test]
    fn submit_stamps_current_time() {
        let mut store = ReportStore::default();
        let before = Utc::now();

        let timestamp = store.submit(&mut draft("A")).unwrap().timestamp;

        assert!(timestamp >= before);
        assert!(timestamp <= Utc::now());
    }

    #[test]
    fn incomplete_draft_changes_nothing() {
        let mut store = ReportStore::seeded(now(), IdAssignment::Monotonic);
        let before = store.clone();
        let mut incomplete = draft("A");
        incomplete.area = None;
        let kept = incomplete.clone();

        let result = store.submit_at(&mut incomplete, now());

        assert_eq!(result, Err(ReportError::IncompleteDraft));
        assert_eq!(store, before);
        assert_eq!(incomplete, kept);
    }

    #[test]
    fn newest_report_is_always_first() {
        let mut store = ReportStore::default();

        store.submit_at(&mut draft("first"), now()).unwrap();
        store.submit_at(&mut draft("second"), now()).unwrap();
        store.submit_at(&mut draft("third"), now()).unwrap();

        let names: Vec<&str> = store.reports().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["third", "second", "first"]);
        let ids: Vec<u32> = store.reports().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn collection_length_ids_match_monotonic_while_nothing_is_removed() {
        let mut by_length = ReportStore::seeded(now(), IdAssignment::CollectionLength);
        let mut monotonic = ReportStore::seeded(now(), IdAssignment::Monotonic);

        for name in ["a", "b", "c"] {
            let a = by_length.submit_at(&mut draft(name), now()).unwrap().id;
            let b = monotonic.submit_at(&mut draft(name), now()).unwrap().id;
            assert_eq!(a, b);
        }
    }

    #[test]
    fn collection_length_ids_collide_when_seeded_with_gaps() {
        let seeded = sample_reports(now()).into_iter().skip(1).collect();
        let mut store = ReportStore::from_reports(seeded, IdAssignment::CollectionLength);

        let id = store.submit_at(&mut draft("A"), now()).unwrap().id;

        assert_eq!(id, 2);
        assert_eq!(store.reports().iter().filter(|r| r.id == 2).count(), 2);
    }

    #[test]
    fn monotonic_ids_skip_past_highest_known_id() {
        let seeded = sample_reports(now()).into_iter().skip(1).collect();
        let mut store = ReportStore::from_reports(seeded, IdAssignment::Monotonic);

        let id = store.submit_at(&mut draft("A"), now()).unwrap().id;

        assert_eq!(id, 3);
    }

    #[test]
    fn store_with_highest_possible_id_rejects_new_reports() {
        let mut last = sample_reports(now()).remove(0);
        last.id = u32::MAX;
        let mut store = ReportStore::from_reports(vec![last], IdAssignment::Monotonic);
        let before = store.clone();
        let mut full = draft("A");
        let kept = full.clone();

        let result = store.submit_at(&mut full, now());

        assert_eq!(result, Err(ReportError::IdsExhausted));
        assert_eq!(store, before);
        assert_eq!(full, kept);
    }

    #[test]
    fn monotonic_ids_run_up_to_the_last_u32() {
        let mut almost = sample_reports(now()).remove(0);
        almost.id = u32::MAX - 1;
        let mut store = ReportStore::from_reports(vec![almost], IdAssignment::Monotonic);

        let id = store.submit_at(&mut draft("A"), now()).unwrap().id;

        assert_eq!(id, u32::MAX);
        assert_eq!(
            store.submit_at(&mut draft("B"), now()),
            Err(ReportError::IdsExhausted)
        );
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn collection_length_ids_ignore_a_high_existing_id() {
        let mut last = sample_reports(now()).remove(0);
        last.id = u32::MAX;
        let mut store = ReportStore::from_reports(vec![last], IdAssignment::CollectionLength);

        let id = store.submit_at(&mut draft("A"), now()).unwrap().id;

        assert_eq!(id, 2);
    }

    #[test]
    fn assign_changes_only_the_status() {
        let mut store = ReportStore::seeded(now(), IdAssignment::Monotonic);
        let before = store.get(1).unwrap().clone();

        let assigned = store.assign(1).unwrap().clone();

        assert_eq!(
            assigned,
            Report {
                status: ReportStatus::Assigned,
                ..before
            }
        );
        let ids: Vec<u32> = store.reports().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn complete_changes_only_the_status() {
        let mut store = ReportStore::seeded(now(), IdAssignment::Monotonic);
        let before = store.get(2).unwrap().clone();

        let completed = store.complete(2).unwrap().clone();

        assert_eq!(
            completed,
            Report {
                status: ReportStatus::Completed,
                ..before
            }
        );
        assert_eq!(store.get(1).unwrap().status, ReportStatus::Pending);
    }

    #[test]
    fn cannot_complete_a_pending_report() {
        let mut store = ReportStore::seeded(now(), IdAssignment::Monotonic);
        let before = store.clone();

        let result = store.complete(1);

        assert_eq!(
            result,
            Err(ReportError::InvalidTransition {
                id: 1,
                from: ReportStatus::Pending,
                to: ReportStatus::Completed,
            })
        );
        assert_eq!(store, before);
    }

    #[test]
    fn cannot_assign_a_report_twice() {
        let mut store = ReportStore::seeded(now(), IdAssignment::Monotonic);

        let result = store.assign(2);

        assert!(matches!(
            result,
            Err(ReportError::InvalidTransition {
                from: ReportStatus::Assigned,
                ..
            })
        ));
    }

    #[test]
    fn completed_reports_do_not_move_back() {
        let mut store = ReportStore::seeded(now(), IdAssignment::Monotonic);
        store.complete(2).unwrap();

        assert!(store.assign(2).is_err());
        assert!(store.complete(2).is_err());
        assert_eq!(store.get(2).unwrap().status, ReportStatus::Completed);
    }

    #[test]
    fn unknown_report_is_not_found() {
        let mut store = ReportStore::seeded(now(), IdAssignment::Monotonic);

        assert_eq!(store.assign(42), Err(ReportError::ReportNotFound(42)));
        assert_eq!(store.complete(42), Err(ReportError::ReportNotFound(42)));
    }

    #[test]
    fn counts_reports_by_status() {
        let mut store = ReportStore::seeded(now(), IdAssignment::Monotonic);
        store.submit_at(&mut draft("A"), now()).unwrap();

        assert_eq!(store.count_with_status(ReportStatus::Pending), 2);
        assert_eq!(store.count_with_status(ReportStatus::Assigned), 1);
        assert_eq!(store.count_with_status(ReportStatus::Completed), 0);
    }
}
