use crate::contexts::ThemeContext;
use crate::Route;
use dioxus::prelude::*;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Page shell: title bar with the theme toggle above the routed content
#[component]
pub fn Navbar() -> Element {
    let mut theme_ctx = use_context::<ThemeContext>();
    let theme = (theme_ctx.theme)();
    let theme_class = theme.class();
    let toggle_icon = theme.toggle_icon();

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        div { class: "layout-container {theme_class}",
            header { class: "app-header",
                h1 { class: "app-title", "🎬 Movie Search App" }
                button {
                    class: "theme-toggle",
                    title: theme.toggle_label(),
                    onclick: move |_| theme_ctx.toggle(),
                    "{toggle_icon}"
                }
            }
            main {
                class: "main-content",
                Outlet::<Route> {}
            }
        }
    }
}
