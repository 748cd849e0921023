use dioxus::prelude::*;

use super::app::Route;

/// (title, blurb) for the feature cards under the hero.
const FEATURES: &[(&str, &str)] = &[
    (
        "Paperless Receipts",
        "Never lose another receipt. Access your complete shopping history online anytime.",
    ),
    (
        "Track Your Spending",
        "Monitor your shopping habits and manage your budget more effectively.",
    ),
    (
        "Find Past Purchases",
        "Easily locate previous purchases and their prices for better shopping planning.",
    ),
];

#[component]
pub fn LandingView() -> Element {
    let nav = use_navigator();

    rsx! {
        div { class: "landing",
            h1 { "Your Shoprite Receipts Online" }
            p { class: "tagline",
                "Access all your Shoprite shopping receipts, track your spending, and find your favorite products in one convenient place."
            }
            div { class: "landing-actions",
                button {
                    class: "primary",
                    onclick: move |_| { nav.push(Route::Slips {}); },
                    "View My Receipts"
                }
                button {
                    class: "outline",
                    onclick: move |_| { nav.push(Route::Dashboard {}); },
                    "Shopping Summary"
                }
            }
            div { class: "feature-grid",
                {FEATURES.iter().map(|(title, blurb)| rsx! {
                    div { class: "feature-card",
                        key: "{title}",
                        h3 { "{title}" }
                        p { "{blurb}" }
                    }
                })}
            }
        }
    }
}
