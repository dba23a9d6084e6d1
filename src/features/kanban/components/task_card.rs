use leptos::ev::DragEvent;
use leptos::prelude::*;

use crate::core::models::{Column, Task};
use crate::features::kanban::hooks::BoardHandle;
use crate::features::kanban::services::confirm;
use super::EditTaskForm;

const DELETE_PROMPT: &str = "Are you sure you want to delete this task?";

#[component]
pub fn TaskCard(task: Task, column: Column) -> impl IntoView {
    let board = use_context::<BoardHandle>().expect("board context");

    let editing = {
        let id = task.id.clone();
        Memo::new(move |_| board.board.with(|m| m.is_editing(&id)))
    };
    let dragging = {
        let id = task.id.clone();
        Memo::new(move |_| board.board.with(|m| m.is_dragging(&id)))
    };

    move || {
        if editing.get() {
            return view! { <EditTaskForm task=task.clone() column=column /> }.into_any();
        }

        let id_for_drag = task.id.clone();
        let id_for_edit = task.id.clone();
        let id_for_delete = task.id.clone();
        let description = task.description.clone();

        view! {
            <div
                class="task-card"
                class:dragging=move || dragging.get()
                draggable="true"
                tabindex="0"
                data-task-id=task.id.clone()
                data-column=column.key()
                on:dragstart=move |ev: DragEvent| {
                    if let Some(dt) = ev.data_transfer() {
                        dt.set_effect_allowed("move");
                        // Firefox will not start a drag without payload
                        let _ = dt.set_data("text/plain", &id_for_drag);
                    }
                    board.begin_drag(&id_for_drag, column);
                }
                on:dragend=move |_| board.end_drag()
            >
                <div class="task-header">
                    <h3 class="task-title">{task.title.clone()}</h3>
                    <div class="task-actions">
                        <button class="task-action-btn edit-btn" title="Edit task" on:click=move |e| {
                            e.stop_propagation();
                            board.start_edit(&id_for_edit, column);
                        }>"✎"</button>
                        <button class="task-action-btn delete-btn" title="Delete task" on:click=move |e| {
                            e.stop_propagation();
                            if !board.confirm_delete || confirm(DELETE_PROMPT) {
                                board.delete_task(&id_for_delete, column);
                            }
                        }>"🞮"</button>
                    </div>
                </div>
                {(!description.is_empty())
                    .then(|| view! { <p class="task-description">{description}</p> })}
            </div>
        }
        .into_any()
    }
}
