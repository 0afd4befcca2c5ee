use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct SearchInputProps {
    query: String,
    on_change: EventHandler<String>,
    on_submit: EventHandler<String>,
}

#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    let submitted = props.query.clone();

    rsx! {
        form {
            class: "search-container",
            onsubmit: move |evt| {
                evt.prevent_default();
                props.on_submit.call(submitted.clone());
            },
            input {
                class: "search-input",
                r#type: "text",
                placeholder: "Search movies...",
                value: "{props.query}",
                oninput: move |evt| props.on_change.call(evt.value())
            }
            button { class: "search-button", r#type: "submit", title: "Search", "🔍" }
        }
    }
}
