use leptos::ev::DragEvent;
use leptos::prelude::*;

use crate::core::models::Column;
use crate::features::kanban::hooks::BoardHandle;
use super::TaskCard;

/// One column of the board and the drop zone for it.
#[component]
pub fn KanbanColumn(column: Column) -> impl IntoView {
    let board = use_context::<BoardHandle>().expect("board context");
    let tasks = board.column_tasks(column);
    let (drag_over, set_drag_over) = signal(false);

    let handle_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        if let Some(dt) = ev.data_transfer() {
            dt.set_drop_effect("move");
        }
        set_drag_over.set(true);
    };

    let handle_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_over.set(false);
        board.drop_on(column);
        // The source card is re-rendered away by the move, and a detached
        // element does not reliably fire `dragend`.
        board.end_drag();
    };

    view! {
        <div id=column.key() class="kanban-column">
            <div class="column-header">
                <h3>{column.label()}</h3>
                <span class="task-count" class:updated=move || board.is_highlighted(column)>
                    {move || tasks.with(|tasks| tasks.len())}
                </span>
            </div>
            <div
                class="column-content drop-zone"
                class:drag-over=move || drag_over.get()
                on:dragover=handle_drag_over
                on:dragenter=move |ev: DragEvent| {
                    ev.prevent_default();
                    set_drag_over.set(true);
                }
                on:dragleave=move |_| set_drag_over.set(false)
                on:drop=handle_drop
            >
                <div class="task-container">
                    {move || {
                        tasks
                            .get()
                            .into_iter()
                            .map(|task| view! { <TaskCard task=task column=column /> })
                            .collect_view()
                    }}
                </div>
            </div>
        </div>
    }
}
