pub mod search;
pub mod trends;

pub use search::Search;
pub use trends::Trends;

use dioxus::document;
use dioxus::prelude::*;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    // Full-text/date search over the speech corpus
    #[route("/")]
    Search {},

    // Per-entity keyword trends over time
    #[route("/trends")]
    Trends {},
}

#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Dioxus App initialized successfully");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    // Use asset!() macro to ensure CSS is bundled and served correctly
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        div { class: "c-layout",
            AppNavbar {}

            main { class: "c-layout__main",
                Outlet::<Route> {}
            }
        }
    }
}

/// Global navbar with the app title and the two views.
#[component]
fn AppNavbar() -> Element {
    rsx! {
        nav { class: "c-navbar",
            span { class: "c-navbar__logo", "🏛️ Greek Parliament Speeches" }

            div { class: "c-navbar__actions",
                Link {
                    to: Route::Search {},
                    class: "c-navbar__link",
                    "Search"
                }
                Link {
                    to: Route::Trends {},
                    class: "c-navbar__link",
                    "Keyword Trends"
                }
            }
        }
    }
}
