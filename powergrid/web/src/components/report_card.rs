use dioxus::prelude::*;
use powergrid_core::{format_reported_at, Priority, Report, ReportStatus};

/// One complaint in the dashboard list, with the action its status allows
#[component]
pub fn ReportCard(
    report: Report,
    on_assign: EventHandler<u32>,
    on_complete: EventHandler<u32>,
) -> Element {
    let status_color = match report.status {
        ReportStatus::Pending => "bg-yellow-100 text-yellow-800",
        ReportStatus::Assigned => "bg-blue-100 text-blue-800",
        ReportStatus::Completed => "bg-green-100 text-green-800",
    };

    let priority_border = match report.priority {
        Priority::High => "border-l-red-500",
        Priority::Medium => "border-l-yellow-500",
        Priority::Low => "border-l-green-500",
    };

    let id = report.id;
    let reported_at = format_reported_at(&report.timestamp);

    rsx! {
        div { class: "p-6 border-l-4 {priority_border}",
            div { class: "flex flex-col sm:flex-row sm:justify-between sm:items-start gap-4",
                div { class: "flex-1",
                    div { class: "flex items-center space-x-3 mb-2",
                        h4 { class: "text-lg font-semibold text-gray-900", "{report.name}" }
                        span { class: "px-3 py-1 rounded-full text-xs font-medium {status_color}",
                            "{report.status}"
                        }
                    }
                    div { class: "space-y-2 text-sm text-gray-600",
                        div { class: "flex items-center space-x-2",
                            span { "📞" }
                            span { "{report.phone}" }
                        }
                        div { class: "flex items-center space-x-2",
                            span { "📍" }
                            span { "{report.area} - {report.address}" }
                        }
                        div { class: "flex items-center space-x-2",
                            span { "🕑" }
                            span { "Reported at {reported_at}" }
                        }
                    }
                    p { class: "mt-3 text-gray-700", "{report.description}" }
                }
                div { class: "flex flex-col space-y-2 sm:ml-4",
                    {match report.status {
                        ReportStatus::Pending => rsx! {
                            button {
                                class: "px-4 py-2 bg-blue-600 text-white text-sm rounded-lg hover:bg-blue-700 transition-colors duration-200",
                                onclick: move |_| on_assign.call(id),
                                "Assign Tech"
                            }
                        },
                        ReportStatus::Assigned => rsx! {
                            button {
                                class: "px-4 py-2 bg-green-600 text-white text-sm rounded-lg hover:bg-green-700 transition-colors duration-200",
                                onclick: move |_| on_complete.call(id),
                                "Mark Complete"
                            }
                        },
                        ReportStatus::Completed => rsx! {},
                    }}
                }
            }
        }
    }
}
