use dioxus::{logger::tracing, prelude::*};
use dioxus_desktop::{Config, WindowBuilder};
use views::{MovieSearch, Navbar};

mod components;
mod contexts;
mod omdb;
mod search;
mod utils;
mod views;

use contexts::{create_client_from_env, Theme, ThemeContext};
use utils::config;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Navbar)]
        #[route("/")]
        MovieSearch {},
}

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new().with_title("Marquee")
            ),
        )
        .launch(App);
}

#[component]
fn App() -> Element {
    // Theme lives beside the catalog, never inside search state
    let theme = use_signal(Theme::default);
    use_context_provider(|| ThemeContext { theme });

    // Built once; the result is fixed for the lifetime of the window
    let catalog = use_hook(create_client_from_env);

    match catalog {
        Err(err) => {
            tracing::error!("Failed to create catalog client: {}", err);
            let api_key_env = config::API_KEY_ENV;

            rsx! {
                document::Link { rel: "stylesheet", href: MAIN_CSS }

                div { class: "error-container",
                    div { class: "error-banner",
                        "⚠️ Movie search is unavailable: {err}"
                    }
                    p { class: "error-hint",
                        "Export {api_key_env} with a valid OMDb API key and restart the application."
                    }
                }
            }
        }
        Ok(client) => {
            tracing::debug!("Catalog client ready: {:?}", client);
            use_context_provider(|| client);

            rsx! {
                document::Link { rel: "stylesheet", href: MAIN_CSS }

                Router::<Route> {}
            }
        }
    }
}
