use crate::state::use_app_state;
use dioxus::prelude::*;
use powergrid_core::District;

const INPUT_CLASS: &str = "w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent transition-all duration-200";

/// Outage submission form. Field edits go straight into the shared draft.
#[component]
pub fn ReportForm() -> Element {
    let mut state = use_app_state();
    let mut draft = state.draft;
    let current = draft();
    let selected_area = current.area.map(|area| area.as_str()).unwrap_or_default();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        state.submit_report();
    };

    rsx! {
        div { class: "max-w-2xl mx-auto",
            div { class: "bg-white rounded-2xl shadow-xl p-8 border border-gray-100",
                div { class: "text-center mb-8",
                    div { class: "p-4 bg-gradient-to-r from-red-500 to-orange-500 rounded-full w-20 h-20 mx-auto mb-4 flex items-center justify-center",
                        span { class: "text-4xl", "⚠️" }
                    }
                    h2 { class: "text-3xl font-bold text-gray-900 mb-2", "Report Power Outage" }
                    p { class: "text-gray-600",
                        "Help us restore power to your area quickly by providing details below"
                    }
                }

                form { class: "space-y-6", onsubmit: handle_submit,
                    div { class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                        div {
                            label { class: "block text-sm font-medium text-gray-700 mb-2", "👤 Full Name" }
                            input {
                                r#type: "text",
                                name: "name",
                                value: "{current.name}",
                                oninput: move |evt: FormEvent| draft.write().name = evt.value(),
                                class: INPUT_CLASS,
                                placeholder: "Enter your full name",
                            }
                        }
                        div {
                            label { class: "block text-sm font-medium text-gray-700 mb-2", "📞 Phone Number" }
                            input {
                                r#type: "tel",
                                name: "phone",
                                value: "{current.phone}",
                                oninput: move |evt: FormEvent| draft.write().phone = evt.value(),
                                class: INPUT_CLASS,
                                placeholder: "+234-xxx-xxx-xxxx",
                            }
                        }
                    }

                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-2", "📍 Area/District" }
                        select {
                            name: "area",
                            value: "{selected_area}",
                            onchange: move |evt: FormEvent| draft.write().area = evt.value().parse().ok(),
                            class: INPUT_CLASS,
                            option { value: "", "Select your area" }
                            for district in District::ALL {
                                option {
                                    key: "{district}",
                                    value: "{district}",
                                    selected: current.area == Some(district),
                                    "{district}"
                                }
                            }
                        }
                    }

                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-2", "Full Address" }
                        input {
                            r#type: "text",
                            name: "address",
                            value: "{current.address}",
                            oninput: move |evt: FormEvent| draft.write().address = evt.value(),
                            class: INPUT_CLASS,
                            placeholder: "Street address, house number, etc.",
                        }
                    }

                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-2", "Description of Issue" }
                        textarea {
                            name: "description",
                            value: "{current.description}",
                            oninput: move |evt: FormEvent| draft.write().description = evt.value(),
                            rows: "4",
                            class: "{INPUT_CLASS} resize-none",
                            placeholder: "Please describe the power issue you're experiencing...",
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "w-full bg-gradient-to-r from-blue-600 to-indigo-600 text-white py-4 px-6 rounded-lg font-semibold hover:from-blue-700 hover:to-indigo-700 transition-all duration-200 shadow-lg",
                        "Submit Complaint"
                    }
                }
            }
        }
    }
}
