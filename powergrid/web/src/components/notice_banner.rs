use crate::state::{use_app_state, NoticeKind};
use dioxus::prelude::*;

/// Dismissible banner for the latest submission result
#[component]
pub fn NoticeBanner() -> Element {
    let mut state = use_app_state();
    let Some(notice) = state.notice.read().clone() else {
        return rsx! {};
    };

    let style = match notice.kind {
        NoticeKind::Success => "bg-green-50 border-green-200 text-green-700",
        NoticeKind::Error => "bg-red-50 border-red-200 text-red-600",
    };

    rsx! {
        div { class: "max-w-2xl mx-auto mb-6 border rounded-lg p-4 flex justify-between items-center {style}",
            role: "status",
            p { "{notice.message}" }
            button {
                class: "ml-4 text-sm font-medium opacity-70 hover:opacity-100",
                onclick: move |_| state.dismiss_notice(),
                "Dismiss"
            }
        }
    }
}
