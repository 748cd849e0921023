use dioxus::prelude::*;

use super::dashboard_view::DashboardView;
use super::landing::LandingView;
use super::shared_state::{use_shared_state, SharedState};
use super::slip_detail::SlipDetailView;
use super::slips_view::SlipsView;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Landing {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/slips")]
    Slips {},
    #[route("/slip/:id")]
    Slip { id: String },
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(SharedState::new()));

    rsx! { Router::<Route> {} }
}

#[component]
fn AppLayout() -> Element {
    let nav = use_navigator();
    let shared_state = use_shared_state();
    let last_error = shared_state.read().last_error.clone();

    rsx! {
        div { class: "slips-app",
            header { class: "app-header",
                div {
                    class: "brand",
                    onclick: move |_| { nav.push(Route::Landing {}); },
                    h1 { "Shoprite Receipts" }
                }
                nav {
                    button {
                        onclick: move |_| { nav.push(Route::Dashboard {}); },
                        "Dashboard"
                    }
                    button {
                        onclick: move |_| { nav.push(Route::Slips {}); },
                        "My Slips"
                    }
                }
            }
            if let Some(err) = last_error {
                p { class: "connection-status error", "Error: {err}" }
            }
            main {
                Outlet::<Route> {}
            }
        }
    }
}

/// Route component: renders the landing page.
#[component]
fn Landing() -> Element {
    rsx! { LandingView {} }
}

/// Route component: renders the sales dashboard.
#[component]
fn Dashboard() -> Element {
    rsx! { DashboardView {} }
}

/// Route component: renders the searchable receipt list.
#[component]
fn Slips() -> Element {
    rsx! { SlipsView {} }
}

/// Route component: renders one receipt by id from the URL.
#[component]
fn Slip(id: String) -> Element {
    rsx! { SlipDetailView { receipt_id: id } }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    let path = segments.join("/");

    rsx! {
        div { class: "not-found",
            h2 { "Page Not Found" }
            p { "Nothing lives at /{path}." }
            button {
                onclick: move |_| { nav.push(Route::Landing {}); },
                "Go Home"
            }
        }
    }
}
