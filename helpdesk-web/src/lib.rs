pub mod api;
pub mod config;
pub mod demo_data;
pub mod pages;

use api::HelpdeskApi;
use config::AppConfig;
use dioxus::prelude::*;
use pages::{AppLayout, Dashboard};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Dashboard {},
}

#[component]
pub fn App() -> Element {
    let config = use_context_provider(AppConfig::load);
    use_context_provider(|| HelpdeskApi::new(&config));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "h-screen", Router::<Route> {} }
    }
}
