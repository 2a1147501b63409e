use dioxus::prelude::*;

use crate::app::{AppController, SpeechHandle};
use crate::components::{add_form::AddForm, header::Header, task_list::TaskList};
use crate::models::{Priority, TaskKey};

#[component]
pub fn TaskListPage() -> Element {
    let controller = use_context::<AppController>();
    let speech = use_context::<SpeechHandle>();
    let mut state = *controller.state();

    let (tasks, form) = {
        let s = state.read();
        (s.tasks.clone(), s.form.clone())
    };
    let count = tasks.len();
    let empty = tasks.is_empty();

    let on_content = move |e: FormEvent| {
        state.write().form.content = e.value();
    };
    let on_priority = move |e: FormEvent| {
        if let Some(p) = Priority::parse(&e.value()) {
            state.write().form.priority = p;
        }
    };
    let on_remind_at = move |e: FormEvent| {
        state.write().form.remind_at = e.value();
    };
    let on_add = {
        let controller = controller.clone();
        move |_: MouseEvent| {
            let controller = controller.clone();
            spawn(async move { controller.submit().await });
        }
    };
    let on_delete = {
        let controller = controller.clone();
        move |key: TaskKey| {
            let controller = controller.clone();
            spawn(async move { controller.delete(key).await });
        }
    };
    let on_voice = move |_: MouseEvent| {
        let mut recognizer = speech.0.borrow_mut();
        controller.dictate(&mut **recognizer);
    };

    rsx! {
        div { class: "app",
            Header { count }
            div { class: "card",
                AddForm {
                    content: form.content,
                    priority: form.priority,
                    remind_at: form.remind_at,
                    on_content,
                    on_priority,
                    on_remind_at,
                    on_add,
                    on_voice,
                }
                if empty {
                    div { class: "empty", "No tasks yet. Add one above." }
                }
                TaskList { tasks, on_delete }
            }
        }
    }
}
