use crate::core::error::ValidationError;
use crate::core::models::{Board, Column, Task};

use super::drag::{DragState, MoveRequest};
use super::id_source::IdSource;

/// The task currently open in an edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTarget {
    pub task_id: String,
    pub column: Column,
}

/// Owns the board and the transient edit and drag state of one page session.
///
/// Every mutation runs to completion inside a single method call. Operations
/// on ids that are no longer on the board are no-ops, since the view may hold
/// stale references (a double click, a drag that outlived its task).
pub struct BoardManager {
    board: Board,
    editing: Option<EditTarget>,
    drag: DragState,
    ids: Box<dyn IdSource>,
}

impl BoardManager {
    pub fn new(board: Board, ids: impl IdSource + 'static) -> Self {
        Self {
            board,
            editing: None,
            drag: DragState::default(),
            ids: Box::new(ids),
        }
    }

    pub fn snapshot(&self) -> &Board {
        &self.board
    }

    pub fn add_task(&mut self, column: Column, title: &str, description: &str) -> Result<Task, ValidationError> {
        let title = non_empty_title(title)?;
        let task = Task::new(self.fresh_id(), title, description.trim());
        self.board.column_mut(column).push(task.clone());
        log::debug!("added task {} to {}", task.id, column);
        Ok(task)
    }

    /// Removes the task from `column`. Returns whether anything was removed.
    pub fn delete_task(&mut self, task_id: &str, column: Column) -> bool {
        let tasks = self.board.column_mut(column);
        let before = tasks.len();
        tasks.retain(|t| t.id != task_id);
        let removed = tasks.len() != before;

        if removed {
            if self.is_editing(task_id) {
                self.editing = None;
            }
            log::debug!("deleted task {} from {}", task_id, column);
        } else {
            log::info!("delete ignored: task {} is not in {}", task_id, column);
        }
        removed
    }

    pub fn start_edit(&mut self, task_id: &str, column: Column) -> Option<Task> {
        let task = self.board.find(task_id, column).cloned()?;
        self.editing = Some(EditTarget {
            task_id: task.id.clone(),
            column,
        });
        Some(task)
    }

    pub fn save_edit(
        &mut self,
        task_id: &str,
        column: Column,
        new_title: &str,
        new_description: &str,
    ) -> Result<(), ValidationError> {
        let title = non_empty_title(new_title)?;

        match self.board.column_mut(column).iter_mut().find(|t| t.id == task_id) {
            Some(task) => {
                task.update_title(title.to_string());
                task.update_description(new_description.trim().to_string());
                log::debug!("saved edit of task {}", task_id);
            }
            None => log::info!("edit of task {} dropped: no longer in {}", task_id, column),
        }

        self.editing = None;
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn editing(&self) -> Option<&EditTarget> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self, task_id: &str) -> bool {
        self.editing.as_ref().is_some_and(|e| e.task_id == task_id)
    }

    /// Appends the task to the end of `target`. Returns whether it moved.
    pub fn move_task(&mut self, task_id: &str, source: Column, target: Column) -> bool {
        if source == target {
            return false;
        }

        let tasks = self.board.column_mut(source);
        let Some(index) = tasks.iter().position(|t| t.id == task_id) else {
            log::info!("move ignored: task {} is not in {}", task_id, source);
            return false;
        };
        let task = tasks.remove(index);
        self.board.column_mut(target).push(task);

        if let Some(edit) = self.editing.as_mut().filter(|e| e.task_id == task_id) {
            edit.column = target;
        }
        log::debug!("moved task {} from {} to {}", task_id, source, target);
        true
    }

    pub fn begin_drag(&mut self, task_id: &str, source: Column) {
        self.drag.begin(task_id, source);
    }

    /// Handles a drop on `target`, returning the move it performed.
    pub fn drop_on(&mut self, target: Column) -> Option<MoveRequest> {
        let request = self.drag.drop_on(target)?;
        self.move_task(&request.task_id, request.source, request.target)
            .then_some(request)
    }

    pub fn end_drag(&mut self) {
        self.drag.end();
    }

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    pub fn is_dragging(&self, task_id: &str) -> bool {
        self.drag.is_dragging(task_id)
    }

    fn fresh_id(&mut self) -> String {
        loop {
            let id = self.ids.next_id();
            if !self.board.contains(&id) {
                return id;
            }
        }
    }
}

fn non_empty_title(title: &str) -> Result<&str, ValidationError> {
    let title = title.trim();
    if title.is_empty() {
        Err(ValidationError::EmptyTitle)
    } else {
        Ok(title)
    }
}
