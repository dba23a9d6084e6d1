use leptos::prelude::*;
use leptos::ev;

use crate::core::models::{Column, Task};
use crate::features::kanban::hooks::BoardHandle;
use crate::features::kanban::services::show_error;

/// Inline editor shown in place of a card while it is the edit target.
#[component]
pub fn EditTaskForm(task: Task, column: Column) -> impl IntoView {
    let board = use_context::<BoardHandle>().expect("board context");
    let (title, set_title) = signal(task.title.clone());
    let (description, set_description) = signal(task.description.clone());

    let task_id = task.id.clone();

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if let Err(e) = board.save_edit(&task_id, column, &title.get_untracked(), &description.get_untracked()) {
            show_error(&e.to_string());
        }
    };

    view! {
        <form class="task-card task-edit" on:submit=handle_submit>
            <input
                id=format!("edit-title-{}", task.id)
                type="text"
                on:input=move |ev| set_title.set(event_target_value(&ev))
                prop:value=move || title.get()
            />
            <textarea
                id=format!("edit-description-{}", task.id)
                rows="3"
                on:input=move |ev| set_description.set(event_target_value(&ev))
                prop:value=move || description.get()
            ></textarea>
            <div class="form-actions">
                <button type="submit" class="btn-success">"Save"</button>
                <button type="button" class="btn-secondary" on:click=move |_| board.cancel_edit()>"Cancel"</button>
            </div>
        </form>
    }
}
