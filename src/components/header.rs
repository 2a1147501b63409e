use dioxus::prelude::*;

#[component]
pub fn Header(count: usize) -> Element {
    let noun = if count == 1 { "task" } else { "tasks" };
    rsx! {
        div { class: "header",
            h1 { class: "title", "Smart To-Do" }
            span { class: "meta", "{count} {noun}" }
        }
    }
}
