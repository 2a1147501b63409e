use dioxus::prelude::*;

use crate::models::TaskKey;
use crate::view::{RowPart, TaskRow};

#[component]
pub fn TaskItem(row: TaskRow, on_delete: EventHandler<TaskKey>) -> Element {
    let content = row.key.content.clone();
    let target = row.clone();
    let click = Callback::new(move |part: RowPart| {
        if let Some(key) = target.delete_target(part) {
            on_delete.call(key);
        }
    });
    rsx! {
        li { class: "list-item",
            span { class: "item-title", onclick: move |_| click.call(RowPart::Text), "{row.content}" }
            span {
                class: "priority {row.priority_class}",
                onclick: move |_| click.call(RowPart::Priority),
                "{row.priority_label}"
            }
            span { class: "remind-at", onclick: move |_| click.call(RowPart::Reminder), "{row.reminder}" }
            button {
                class: "delete-btn",
                "data-task": "{content}",
                onclick: move |_| click.call(RowPart::DeleteButton),
                "❌"
            }
        }
    }
}
