use dioxus::prelude::*;

use crate::omdb::MovieSummary;
use crate::utils::display_utils::format_year;

#[derive(Props, PartialEq, Clone)]
pub struct MovieCardProps {
    movie: MovieSummary,
    /// Position in the grid, used to stagger the entrance animation
    index: usize,
}

#[component]
pub fn MovieCard(props: MovieCardProps) -> Element {
    let poster = props.movie.poster.src().to_string();
    let year = format_year(&props.movie.year);
    let delay = format!("animation-delay: {:.1}s;", props.index as f64 * 0.1);

    rsx! {
        div {
            class: "movie-card",
            style: "{delay}",
            img {
                class: "movie-poster",
                src: "{poster}",
                alt: "{props.movie.title}"
            }
            div { class: "movie-details",
                h3 { class: "movie-title", "{props.movie.title}" }
                p { class: "movie-year", "{year}" }
            }
            div { class: "movie-overlay",
                p { "🎥 View Details" }
            }
        }
    }
}
