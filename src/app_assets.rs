use dioxus::prelude::*;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

pub fn head_nodes() -> Element {
    rsx! {
        document::Title { "Smart To-Do" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
    }
}
