use leptos::ev;
use leptos::prelude::*;
use std::rc::Rc;

use crate::config::BoardConfig;
use crate::core::models::Column;
use crate::features::kanban::components::{AddFormState, AddTaskForm, KanbanColumn, KanbanHeader};
use crate::features::kanban::hooks::use_board;

#[component]
pub fn Kanban(config: BoardConfig) -> impl IntoView {
    // Every component below reaches the board through this context
    let board = use_board(&config);
    provide_context(board);

    let add_form = AddFormState::new();

    // Escape dismisses whichever form is open
    let _escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            add_form.hide();
            board.cancel_edit();
        }
    });

    let open_add_form: Rc<dyn Fn()> = Rc::new(move || add_form.show());

    view! {
        <div class="kanban-page">
            <KanbanHeader title="Kanban Board" on_add=open_add_form />
            <AddTaskForm form=add_form />
            <div class="kanban-board">
                {Column::all()
                    .into_iter()
                    .map(|column| view! { <KanbanColumn column=column /> })
                    .collect_view()}
            </div>
        </div>
    }
}
