use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn KanbanHeader(
    #[prop(into)] title: String,
    on_add: Rc<dyn Fn() + 'static>,
) -> impl IntoView {
    view! {
        <header class="kanban-header">
            <h1>{title}</h1>
            <div class="kanban-actions">
                <button id="addTaskBtn" class="btn-primary kanban-header-btn" on:click={
                    let cb = on_add.clone();
                    move |_| (cb.as_ref())()
                }>"+ Add Task"</button>
            </div>
        </header>
    }
}
