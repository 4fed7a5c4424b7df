use crate::state::use_app_state;
use dioxus::prelude::*;
use powergrid_core::View;

fn icon(view: View) -> &'static str {
    match view {
        View::Report => "⚠️",
        View::Dashboard => "🔧",
        View::Predictions => "🧠",
    }
}

/// Tab bar for selecting the current view on wider screens
#[component]
pub fn NavTabs() -> Element {
    let state = use_app_state();
    let current = state.view.read().current();

    rsx! {
        nav { class: "hidden md:block bg-white shadow-sm",
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                div { class: "flex space-x-8",
                    {View::ALL.into_iter().map(|view| rsx! {
                        NavTab { key: "{view.label()}", view, active: view == current }
                    })}
                }
            }
        }
    }
}

#[component]
fn NavTab(view: View, active: bool) -> Element {
    let mut state = use_app_state();
    let tab_class = if active {
        "border-blue-500 text-blue-600"
    } else {
        "border-transparent text-gray-500 hover:text-gray-700 hover:border-gray-300"
    };

    rsx! {
        button {
            class: "py-4 px-6 border-b-2 font-medium text-sm transition-colors duration-200 flex items-center space-x-2 {tab_class}",
            onclick: move |_| state.select_view(view),
            span { "{icon(view)}" }
            span { "{view.label()}" }
        }
    }
}

/// Full-width navigation overlay for small screens; closes after a selection
#[component]
pub fn MobileNav() -> Element {
    let mut state = use_app_state();
    let (open, current) = {
        let controller = state.view.read();
        (controller.is_mobile_nav_open(), controller.current())
    };

    if !open {
        return rsx! {};
    }

    rsx! {
        div { class: "md:hidden fixed inset-0 z-40 bg-black bg-opacity-50",
            onclick: move |_| state.toggle_mobile_nav(),
            nav {
                class: "bg-white shadow-lg p-4 space-y-2",
                onclick: move |evt| evt.stop_propagation(),
                {View::ALL.into_iter().map(|view| {
                    let item_class = if view == current {
                        "bg-blue-50 text-blue-600"
                    } else {
                        "text-gray-700 hover:bg-gray-50"
                    };
                    rsx! {
                        button {
                            key: "{view.label()}",
                            class: "w-full flex items-center space-x-3 px-4 py-3 rounded-lg font-medium {item_class}",
                            onclick: move |_| state.select_view_from_overlay(view),
                            span { "{icon(view)}" }
                            span { "{view.label()}" }
                        }
                    }
                })}
            }
        }
    }
}
