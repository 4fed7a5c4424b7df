//! Session state for PowerGrid Manager.
//!
//! Everything lives in memory for the lifetime of the page. The root component
//! creates the signals once and shares them with every view through context.

use chrono::Utc;
use dioxus::prelude::*;
use powergrid_core::{
    default_predictions, default_roster, DashboardStats, Prediction, ReportDraft, ReportStore,
    Technician, View, ViewController,
};
use tracing::{debug, info, warn};

use crate::config::AppConfig;

pub const SUBMITTED_MESSAGE: &str =
    "Complaint submitted successfully! We will dispatch a technician soon.";

#[cfg(feature = "web")]
const NOTICE_TIMEOUT_MS: u32 = 5_000;

/// A transient message shown above the current view.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    /// Unique per session, so repeated messages can be told apart.
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl Notice {
    pub fn new(id: u64, kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            message: message.into(),
        }
    }
}

/// Whether the notice with `id` is the one on screen, i.e. its timer may clear it.
#[cfg_attr(not(feature = "web"), allow(dead_code))]
fn is_current_notice(shown: Option<&Notice>, id: u64) -> bool {
    shown.is_some_and(|notice| notice.id == id)
}

/// Handles to the shared session signals.
#[derive(Clone, Copy)]
pub struct AppState {
    pub reports: Signal<ReportStore>,
    pub draft: Signal<ReportDraft>,
    pub view: Signal<ViewController>,
    pub notice: Signal<Option<Notice>>,
    next_notice_id: Signal<u64>,
    pub roster: Signal<Vec<Technician>>,
    pub predictions: Signal<Vec<Prediction>>,
}

/// Creates the session state and provides it to every descendant component.
pub fn use_app_state_provider(config: &AppConfig) -> AppState {
    let seed = config.seed_sample_data;
    let id_assignment = config.id_assignment;

    let reports = use_signal(move || {
        if seed {
            ReportStore::seeded(Utc::now(), id_assignment)
        } else {
            ReportStore::new(id_assignment)
        }
    });
    let draft = use_signal(ReportDraft::default);
    let view = use_signal(ViewController::new);
    let notice = use_signal(|| None::<Notice>);
    let next_notice_id = use_signal(|| 0_u64);
    let roster = use_signal(default_roster);
    let predictions = use_signal(default_predictions);

    use_context_provider(|| AppState {
        reports,
        draft,
        view,
        notice,
        next_notice_id,
        roster,
        predictions,
    })
}

/// Convenience hook for accessing the shared session state.
pub fn use_app_state() -> AppState {
    use_context::<AppState>()
}

impl AppState {
    pub fn stats(&self) -> DashboardStats {
        DashboardStats::compute(&self.reports.read(), &self.roster.read())
    }

    /// Submits the current draft and reports the outcome as a notice.
    /// On success the draft is cleared.
    pub fn submit_report(&mut self) {
        let result = {
            let mut draft = self.draft.write();
            self.reports.write().submit(&mut draft).map(|report| report.id)
        };

        match result {
            Ok(id) => {
                info!(report_id = id, "report submitted");
                self.notify(NoticeKind::Success, SUBMITTED_MESSAGE);
            }
            Err(e) => {
                warn!("report rejected: {e}");
                self.notify(NoticeKind::Error, e.to_string());
            }
        }
    }

    pub fn assign(&mut self, report_id: u32) {
        match self.reports.write().assign(report_id) {
            Ok(report) => info!(report_id, area = %report.area, "technician assigned"),
            Err(e) => warn!("cannot assign technician: {e}"),
        }
    }

    pub fn complete(&mut self, report_id: u32) {
        match self.reports.write().complete(report_id) {
            Ok(report) => info!(report_id, area = %report.area, "report completed"),
            Err(e) => warn!("cannot complete report: {e}"),
        }
    }

    pub fn select_view(&mut self, view: View) {
        debug!(?view, "view selected");
        self.view.write().select(view);
    }

    pub fn select_view_from_overlay(&mut self, view: View) {
        debug!(?view, "view selected from mobile navigation");
        self.view.write().select_from_overlay(view);
    }

    pub fn toggle_mobile_nav(&mut self) {
        self.view.write().toggle_mobile_nav();
    }

    pub fn dismiss_notice(&mut self) {
        self.notice.set(None);
    }

    fn notify(&mut self, kind: NoticeKind, message: impl Into<String>) {
        let id = {
            let mut next = self.next_notice_id.write();
            let id = *next;
            *next += 1;
            id
        };
        self.notice.set(Some(Notice::new(id, kind, message)));

        #[cfg(feature = "web")]
        {
            let mut slot = self.notice;
            spawn(async move {
                gloo_timers::future::TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
                // Leave a newer notice in place.
                let expired = is_current_notice((*slot.peek()).as_ref(), id);
                if expired {
                    slot.set(None);
                }
            });
        }
    }
}
