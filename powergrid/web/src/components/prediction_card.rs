use dioxus::prelude::*;
use powergrid_core::Prediction;

#[component]
pub fn PredictionCard(prediction: Prediction) -> Element {
    let percent = prediction.probability_percent();
    let next_outage = prediction.display_next_outage();

    rsx! {
        div { class: "bg-white rounded-xl p-6 shadow-lg border border-gray-100 hover:shadow-xl transition-shadow duration-300",
            div { class: "flex items-center justify-between mb-4",
                h3 { class: "text-xl font-semibold text-gray-900", "{prediction.area}" }
                div { class: "flex items-center space-x-2",
                    span { "📈" }
                    span { class: "text-sm font-medium text-purple-600", "{percent}%" }
                }
            }

            div { class: "space-y-4",
                PredictionDetail { icon: "📅".to_string(), label: "Predicted Outage".to_string(), value: next_outage }
                PredictionDetail { icon: "🕑".to_string(), label: "Expected Duration".to_string(), value: prediction.duration.clone() }
                PredictionDetail { icon: "🔋".to_string(), label: "Reason".to_string(), value: prediction.reason.clone() }
            }

            div { class: "mt-6",
                div { class: "w-full bg-gray-200 rounded-full h-2",
                    div {
                        class: "bg-gradient-to-r from-purple-600 to-pink-600 h-2 rounded-full transition-all duration-500",
                        style: "width: {percent}%",
                    }
                }
                p { class: "text-xs text-gray-500 mt-2", "Probability Score: {percent}%" }
            }
        }
    }
}

#[component]
fn PredictionDetail(icon: String, label: String, value: String) -> Element {
    rsx! {
        div { class: "flex items-center space-x-3",
            span { class: "text-gray-400", "{icon}" }
            div {
                p { class: "text-sm text-gray-600", "{label}" }
                p { class: "font-medium text-gray-900", "{value}" }
            }
        }
    }
}
