use leptos::prelude::*;
use leptos::ev;

use crate::core::models::Column;
use crate::features::kanban::hooks::BoardHandle;
use crate::features::kanban::services::show_error;

/// Inputs of the inline "add task" form. Hiding the form resets them.
#[derive(Clone, Copy)]
pub struct AddFormState {
    pub visible: RwSignal<bool>,
    pub title: RwSignal<String>,
    pub description: RwSignal<String>,
    pub column: RwSignal<Column>,
}

impl AddFormState {
    pub fn new() -> Self {
        Self {
            visible: RwSignal::new(false),
            title: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            column: RwSignal::new(Column::default()),
        }
    }

    pub fn show(&self) {
        self.visible.set(true);
    }

    pub fn hide(&self) {
        self.visible.set(false);
        self.title.set(String::new());
        self.description.set(String::new());
        self.column.set(Column::default());
    }
}

impl Default for AddFormState {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn AddTaskForm(form: AddFormState) -> impl IntoView {
    let board = use_context::<BoardHandle>().expect("board context");
    let title_ref = NodeRef::<leptos::html::Input>::new();

    // Focus the title input whenever the form opens
    Effect::new(move |_| {
        if form.visible.get() {
            if let Some(input) = title_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let column = form.column.get_untracked();
        let title = form.title.get_untracked();
        let description = form.description.get_untracked();

        match board.add_task(column, &title, &description) {
            Ok(()) => form.hide(),
            Err(e) => show_error(&e.to_string()),
        }
    };

    view! {
        <form
            id="addTaskForm"
            class="add-task-form"
            class:hidden=move || !form.visible.get()
            class:form-slide-in=move || form.visible.get()
            on:submit=handle_submit
        >
            <div class="form-group">
                <label>"TITLE"</label>
                <input
                    id="taskTitle"
                    type="text"
                    placeholder="Task title..."
                    node_ref=title_ref
                    on:input=move |ev| form.title.set(event_target_value(&ev))
                    prop:value=move || form.title.get()
                />
            </div>
            <div class="form-group">
                <label>"DESCRIPTION"</label>
                <textarea
                    id="taskDescription"
                    placeholder="Task description..."
                    rows="3"
                    on:input=move |ev| form.description.set(event_target_value(&ev))
                    prop:value=move || form.description.get()
                ></textarea>
            </div>
            <div class="form-group">
                <label>"COLUMN"</label>
                <select
                    id="taskColumn"
                    on:change=move |ev| {
                        if let Ok(column) = event_target_value(&ev).parse::<Column>() {
                            form.column.set(column);
                        }
                    }
                    prop:value=move || form.column.get().key()
                >
                    {Column::all()
                        .into_iter()
                        .map(|c| view! { <option value=c.key()>{c.label()}</option> })
                        .collect_view()}
                </select>
            </div>
            <div class="form-actions">
                <button id="saveTaskBtn" type="submit" class="btn-success">"Add Task"</button>
                <button id="cancelTaskBtn" type="button" class="btn-secondary" on:click=move |_| form.hide()>"Cancel"</button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hide_resets_every_field() {
        let form = AddFormState::new();
        form.show();
        form.title.set("Draft".to_string());
        form.description.set("notes".to_string());
        form.column.set(Column::Done);

        form.hide();

        assert!(!form.visible.get_untracked());
        assert_eq!(form.title.get_untracked(), "");
        assert_eq!(form.description.get_untracked(), "");
        assert_eq!(form.column.get_untracked(), Column::ToDo);
    }

    #[test]
    fn show_keeps_entered_values() {
        let form = AddFormState::new();
        form.title.set("Draft".to_string());
        form.show();

        assert!(form.visible.get_untracked());
        assert_eq!(form.title.get_untracked(), "Draft");
    }
}
