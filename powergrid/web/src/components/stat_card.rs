use dioxus::prelude::*;

/// A single dashboard counter
#[component]
pub fn StatCard(label: String, value: usize, icon: String, accent: String) -> Element {
    rsx! {
        div { class: "bg-white rounded-xl p-6 shadow-lg border border-gray-100",
            div { class: "flex items-center justify-between",
                div {
                    p { class: "text-sm font-medium text-gray-600", "{label}" }
                    p { class: "text-3xl font-bold text-gray-900", "{value}" }
                }
                div { class: "p-3 rounded-lg {accent}",
                    span { class: "text-2xl", "{icon}" }
                }
            }
        }
    }
}
