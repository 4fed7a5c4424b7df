use dioxus::prelude::*;
use tracing::{info, warn};

mod components;
mod config;
mod state;
mod views;

use components::{Header, MobileNav, NavTabs, NoticeBanner};
use config::AppConfig;
use views::CurrentView;

// We can import assets in dioxus with the `asset!` macro. This macro takes a path to an asset relative to the crate root.
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    let level = config.tracing_level().unwrap_or(tracing::Level::INFO);
    dioxus::logger::init(level).expect("Failed to initialize logger");

    if let Some(e) = config_error {
        warn!("Falling back to default configuration: {e:#}");
    }
    if let Err(e) = config.tracing_level() {
        warn!("{e}, using info");
    }
    info!(
        seed_sample_data = config.seed_sample_data,
        id_assignment = ?config.id_assignment,
        "Starting PowerGrid Manager"
    );

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

/// Root component. Owns the session state and lays out the header, navigation and current view.
#[component]
fn App() -> Element {
    let config = use_context::<AppConfig>();
    state::use_app_state_provider(&config);

    rsx! {
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }

        div { class: "min-h-screen bg-gradient-to-br from-blue-50 via-white to-indigo-50",
            Header {}
            NavTabs {}
            MobileNav {}
            main { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8",
                NoticeBanner {}
                CurrentView {}
            }
        }
    }
}
