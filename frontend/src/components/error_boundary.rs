//! Failure displays of the explore page.

use common::explore_const::EXPLORE_PATH;
use dioxus::prelude::*;

use crate::pages::explore_page::ExploreState;

/// Catches render errors of the result area; recovering re-sends the current
/// filters, since the failed render usually came from the last response.
#[component]
pub fn ResultsErrorBoundary(children: Element) -> Element {
    let search_again = use_context::<ExploreState>().search_again;
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(error) => format!("{:#?}", error.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    ErrorPanel {
                        title: "Cannot show the search results",
                        error_txt,
                        button {
                            class: "x-error-action",
                            onclick: move |_| {
                                err.clear_errors();
                                search_again.call(());
                            },
                            "Search again"
                        }
                    }
                }
            },
            div {
                width: "100%",
                {children}
            }
        }
    }
}

/// Replaces the whole page when the host page gives no origin or document.
#[component]
pub fn EnvironmentErrorDisplay(error_txt: String) -> Element {
    rsx! {
        ErrorPanel {
            title: "Dataset search is unavailable on this page",
            error_txt,
            a { class: "x-error-action", href: EXPLORE_PATH, "Reload" }
        }
    }
}

#[component]
fn ErrorPanel(title: String, error_txt: String, children: Element) -> Element {
    rsx! {
        div {
            width: "100%",
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            gap: "8px",
            padding: "24px",
            box_sizing: "border-box",

            h2 { style: "color: darkred; font-size: 22px; font-weight: 400; margin: 0;", "{title}" }
            pre {
                style: "color: darkred; border: 1px solid #E0B4B4; border-radius: 6px; padding: 10px; margin: 0; max-width: 600px; max-height: 300px; overflow-y: auto; text-wrap: auto;",
                "{error_txt}"
            }
            {children}
        }
    }
}
