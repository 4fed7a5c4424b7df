use crate::components::PredictionCard;
use crate::state::use_app_state;
use dioxus::prelude::*;

#[component]
pub fn Predictions() -> Element {
    let state = use_app_state();
    let predictions = state.predictions.read().clone();

    rsx! {
        div { class: "space-y-8",
            div { class: "text-center",
                div { class: "p-4 bg-gradient-to-r from-purple-600 to-pink-600 rounded-full w-20 h-20 mx-auto mb-4 flex items-center justify-center",
                    span { class: "text-4xl", "🧠" }
                }
                h2 { class: "text-3xl font-bold text-gray-900 mb-2", "AI Power Predictions" }
                p { class: "text-gray-600 max-w-2xl mx-auto",
                    "Our AI system analyzes historical data, weather patterns, and grid load to predict potential outages"
                }
            }

            div { class: "grid grid-cols-1 lg:grid-cols-3 gap-6",
                {predictions.iter().map(|prediction| rsx! {
                    PredictionCard { key: "{prediction.area}", prediction: prediction.clone() }
                })}
            }

            div { class: "bg-gradient-to-r from-blue-50 to-indigo-50 rounded-xl p-8 border border-blue-100",
                div { class: "flex items-start space-x-4",
                    div { class: "p-3 bg-blue-100 rounded-lg",
                        span { class: "text-2xl", "🧠" }
                    }
                    div {
                        h3 { class: "text-lg font-semibold text-gray-900 mb-2", "How AI Predictions Work" }
                        p { class: "text-gray-700 leading-relaxed",
                            "Our machine learning model analyzes multiple factors including historical outage patterns, "
                            "weather forecasts, grid load distribution, equipment age, and maintenance schedules to "
                            "predict potential power disruptions. This helps us proactively position technicians "
                            "and prepare communities for planned maintenance."
                        }
                    }
                }
            }
        }
    }
}
