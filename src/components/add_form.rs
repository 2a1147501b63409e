use dioxus::prelude::*;

use crate::models::Priority;

#[component]
pub fn AddForm(
    content: String,
    priority: Priority,
    remind_at: String,
    on_content: EventHandler<FormEvent>,
    on_priority: EventHandler<FormEvent>,
    on_remind_at: EventHandler<FormEvent>,
    on_add: EventHandler<MouseEvent>,
    on_voice: EventHandler<MouseEvent>,
) -> Element {
    let selected = priority.0.to_string();
    rsx! {
        div { class: "add",
            input {
                id: "task-input",
                class: "text",
                r#type: "text",
                placeholder: "Add a task...",
                value: "{content}",
                oninput: move |e| on_content.call(e),
            }
            select {
                id: "priority-input",
                class: "select",
                value: "{selected}",
                onchange: move |e| on_priority.call(e),
                option { value: "1", "Low" }
                option { value: "2", "Medium" }
                option { value: "3", "High" }
            }
            input {
                id: "remind-at-input",
                class: "text",
                r#type: "datetime-local",
                value: "{remind_at}",
                oninput: move |e| on_remind_at.call(e),
            }
            button { id: "add-task-btn", class: "btn btn-primary", onclick: move |e| on_add.call(e), "Add Task" }
            button { id: "voice-input-btn", class: "btn btn-ghost", onclick: move |e| on_voice.call(e), "🎤 Start Voice Input" }
        }
    }
}
