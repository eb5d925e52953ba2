use dioxus::prelude::*;

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            style: "color: rgba(0, 0, 0, 0.6); font-size: 18px; padding: 10px; margin: 15px; text-align: center;",
            "Searching datasets..."
        }
    }
}
