use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div { class: "spinner-container",
            div { class: "spinner", role: "status", aria_label: "Loading" }
        }
    }
}
