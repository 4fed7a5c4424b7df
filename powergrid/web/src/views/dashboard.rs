use crate::components::{ReportCard, StatCard};
use crate::state::use_app_state;
use dioxus::prelude::*;

/// Operator view: headline counts and the complaint list
#[component]
pub fn Dashboard() -> Element {
    let mut state = use_app_state();
    let stats = state.stats();
    let reports = state.reports.read().reports().to_vec();

    rsx! {
        div { class: "space-y-8",
            div { class: "flex justify-between items-center",
                h2 { class: "text-3xl font-bold text-gray-900", "Admin Dashboard" }
                div { class: "text-sm text-gray-600", "{stats.pending} pending complaints" }
            }

            div { class: "grid grid-cols-1 md:grid-cols-3 gap-6",
                StatCard {
                    label: "Total Complaints".to_string(),
                    value: stats.total,
                    icon: "⚠️".to_string(),
                    accent: "bg-blue-100".to_string(),
                }
                StatCard {
                    label: "Available Technicians".to_string(),
                    value: stats.available_technicians,
                    icon: "🔧".to_string(),
                    accent: "bg-green-100".to_string(),
                }
                StatCard {
                    label: "Resolved Today".to_string(),
                    value: stats.resolved_today,
                    icon: "✅".to_string(),
                    accent: "bg-emerald-100".to_string(),
                }
            }

            div { class: "bg-white rounded-xl shadow-lg border border-gray-100 overflow-hidden",
                div { class: "px-6 py-4 bg-gray-50 border-b border-gray-200",
                    h3 { class: "text-lg font-semibold text-gray-900", "Recent Complaints" }
                }
                if reports.is_empty() {
                    div { class: "p-12 text-center text-gray-500", "No complaints reported yet" }
                } else {
                    div { class: "divide-y divide-gray-200",
                        {reports.iter().map(|report| rsx! {
                            ReportCard {
                                key: "{report.id}",
                                report: report.clone(),
                                on_assign: move |id| state.assign(id),
                                on_complete: move |id| state.complete(id),
                            }
                        })}
                    }
                }
            }
        }
    }
}
