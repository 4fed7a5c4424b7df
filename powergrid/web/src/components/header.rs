use crate::state::use_app_state;
use dioxus::prelude::*;

/// Application header with branding, system status and the mobile menu toggle
#[component]
pub fn Header() -> Element {
    let mut state = use_app_state();
    let menu_icon = if state.view.read().is_mobile_nav_open() {
        "✕"
    } else {
        "☰"
    };

    rsx! {
        header { class: "bg-white shadow-lg border-b border-gray-100",
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                div { class: "flex justify-between items-center py-6",
                    div { class: "flex items-center space-x-3",
                        div { class: "p-2 bg-gradient-to-r from-blue-600 to-indigo-600 rounded-lg",
                            span { class: "text-3xl", "⚡" }
                        }
                        div {
                            h1 { class: "text-2xl font-bold text-gray-900", "PowerGrid Manager" }
                            p { class: "text-sm text-gray-600", "Smart Power Outage Management System" }
                        }
                    }
                    div { class: "flex items-center space-x-4",
                        div { class: "hidden sm:flex items-center space-x-2 text-sm text-gray-600",
                            span { class: "h-2 w-2 rounded-full bg-green-500" }
                            span { "System Online" }
                        }
                        button {
                            class: "md:hidden p-2 rounded-lg text-gray-600 hover:bg-gray-100",
                            aria_label: "Toggle navigation",
                            onclick: move |_| state.toggle_mobile_nav(),
                            "{menu_icon}"
                        }
                    }
                }
            }
        }
    }
}
