use dioxus::prelude::*;

use crate::components::task_item::TaskItem;
use crate::models::{Task, TaskKey};
use crate::view::render_rows;

/// Rebuilds every row from `tasks`, in order. Only the delete button of a
/// row reacts to clicks.
#[component]
pub fn TaskList(tasks: Vec<Task>, on_delete: EventHandler<TaskKey>) -> Element {
    let rows = render_rows(&tasks);
    rsx! {
        ul { id: "task-list", class: "list",
            for (index, row) in rows.into_iter().enumerate() {
                TaskItem {
                    key: "{index}-{row.key}",
                    row: row.clone(),
                    on_delete,
                }
            }
        }
    }
}
