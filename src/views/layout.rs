use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::{names, utils};

const HIGHLIGHT_JS: &str = "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.7.0";

const ATTRIBUTION: &str = "<!--
    Quiz questions in the style of David Tolnay's Rust Quiz.
    https://github.com/dtolnay/rust-quiz (CC-BY-SA)
-->";

fn css() -> Markup {
    html! {
        link rel="stylesheet" href=(format!("{HIGHLIGHT_JS}/styles/default.min.css"));
        link rel="stylesheet" href=(names::stylesheet_url());
    }
}

fn js() -> Markup {
    html! {
        script src=(format!("{HIGHLIGHT_JS}/highlight.min.js")) {}
        script { "hljs.highlightAll();" }
    }
}

fn header() -> Markup {
    html! {
        header {
            nav {
                a href=(names::QUIZ_URL) {
                    strong { "Crabby Quiz" }
                }
                small { (utils::VERSION) }
            }
        }
    }
}

pub fn page(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta http-equiv="X-UA-Compatible" content="IE=edge";
                meta name="viewport" content="width=device-width, initial-scale=1";

                (css())
                (js())
                (PreEscaped(ATTRIBUTION))

                title { (format!("{title} - \u{1F980} Crabby Quiz")) }
            }

            body {
                (header())
                main { (body) }
            }
        }
    }
}

pub fn error_page(message: &str, detail: &str) -> Markup {
    page(
        "Error",
        html! {
            h1 { (message) }
            p { (detail) }
            a href=(names::QUIZ_URL) { "Start over" }
        },
    )
}
