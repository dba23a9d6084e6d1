pub mod add_task_form;
pub mod column;
pub mod edit_task_form;
pub mod header;
pub mod task_card;

pub use add_task_form::{AddFormState, AddTaskForm};
pub use column::KanbanColumn;
pub use edit_task_form::EditTaskForm;
pub use header::KanbanHeader;
pub use task_card::TaskCard;
