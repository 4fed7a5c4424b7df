mod dashboard;
mod predictions;
mod report_form;

pub use dashboard::Dashboard;
pub use predictions::Predictions;
pub use report_form::ReportForm;

use crate::state::use_app_state;
use dioxus::prelude::*;
use powergrid_core::View;

/// Renders whichever view is currently selected
#[component]
pub fn CurrentView() -> Element {
    let state = use_app_state();
    let current = state.view.read().current();

    match current {
        View::Report => rsx! { ReportForm {} },
        View::Dashboard => rsx! { Dashboard {} },
        View::Predictions => rsx! { Predictions {} },
    }
}
