use leptos::prelude::*;

use crate::config::BoardConfig;
use crate::core::models::{Column, Task};
use crate::core::services::{BoardManager, MoveRequest, UuidIds};
use crate::core::ValidationError;
use crate::features::kanban::services::flash_count;

/// Reactive handle on the board, shared with the components through context.
///
/// Each operation is a single signal update, so a re-render always sees a
/// mutation as a whole. Count badges whose column length changed are flashed.
#[derive(Clone, Copy)]
pub struct BoardHandle {
    pub board: RwSignal<BoardManager>,
    pub highlighted: RwSignal<[bool; 3]>,
    pub highlight_ms: u32,
    pub confirm_delete: bool,
}

pub fn use_board(config: &BoardConfig) -> BoardHandle {
    let board = RwSignal::new(BoardManager::new(config.seed.clone(), UuidIds));

    BoardHandle {
        board,
        highlighted: RwSignal::new([false; 3]),
        highlight_ms: config.highlight_ms,
        confirm_delete: config.confirm_delete,
    }
}

impl BoardHandle {
    /// Tasks of one column. Only notifies when that column's contents change,
    /// so drag and edit bookkeeping does not rebuild the list under the pointer.
    pub fn column_tasks(&self, column: Column) -> Memo<Vec<Task>> {
        let board = self.board;
        Memo::new(move |_| board.with(|m| m.snapshot().column(column).to_vec()))
    }

    pub fn is_highlighted(&self, column: Column) -> bool {
        self.highlighted.with(|h| h[column.index()])
    }

    /// Adds a task and flashes its column. Nothing happens once the board is disposed.
    pub fn add_task(&self, column: Column, title: &str, description: &str) -> Result<(), ValidationError> {
        match self.mutate("add", |m| m.add_task(column, title, description)) {
            Some(Ok(_)) => {
                self.flash(column);
                Ok(())
            }
            Some(Err(e)) => Err(e),
            None => Ok(()),
        }
    }

    pub fn delete_task(&self, task_id: &str, column: Column) {
        if self.board.try_update(|m| m.delete_task(task_id, column)) == Some(true) {
            self.flash(column);
        }
    }

    pub fn start_edit(&self, task_id: &str, column: Column) {
        self.board.update(|m| {
            m.start_edit(task_id, column);
        });
    }

    pub fn save_edit(&self, task_id: &str, column: Column, title: &str, description: &str) -> Result<(), ValidationError> {
        self.mutate("save edit", |m| m.save_edit(task_id, column, title, description))
            .unwrap_or(Ok(()))
    }

    pub fn cancel_edit(&self) {
        if self.board.with_untracked(|m| m.editing().is_some()) {
            self.board.update(|m| m.cancel_edit());
        }
    }

    pub fn begin_drag(&self, task_id: &str, source: Column) {
        self.board.update(|m| m.begin_drag(task_id, source));
    }

    pub fn drop_on(&self, target: Column) -> Option<MoveRequest> {
        let moved = self.board.try_update(|m| m.drop_on(target)).flatten();
        if let Some(request) = &moved {
            self.flash(request.source);
            self.flash(request.target);
        }
        moved
    }

    pub fn end_drag(&self) {
        if !self.board.with_untracked(|m| m.drag().is_idle()) {
            self.board.update(|m| m.end_drag());
        }
    }

    fn mutate<U>(&self, op: &str, f: impl FnOnce(&mut BoardManager) -> U) -> Option<U> {
        let result = self.board.try_update(f);
        if result.is_none() {
            log::warn!("{} ignored: board is disposed", op);
        }
        result
    }

    fn flash(&self, column: Column) {
        flash_count(self.highlighted, column, self.highlight_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Board;

    fn handle() -> BoardHandle {
        use_board(&BoardConfig::default())
    }

    #[test]
    fn starts_from_configured_seed() {
        let board = handle();
        assert_eq!(board.board.with_untracked(|m| m.snapshot().clone()), Board::sample());
        assert!(!board.is_highlighted(Column::ToDo));
    }

    #[test]
    fn blank_title_is_reported_without_mutation() {
        let board = handle();
        assert_eq!(board.add_task(Column::ToDo, "  ", ""), Err(ValidationError::EmptyTitle));
        assert_eq!(board.save_edit("1", Column::ToDo, "", ""), Err(ValidationError::EmptyTitle));
        assert_eq!(board.board.with_untracked(|m| m.snapshot().total()), 4);
    }

    #[test]
    fn disposed_board_ignores_mutations_without_inventing_errors() {
        let board = handle();
        board.board.dispose();

        assert_eq!(board.add_task(Column::ToDo, "Write tests", ""), Ok(()));
        assert_eq!(board.save_edit("1", Column::ToDo, "Renamed", ""), Ok(()));
        assert_eq!(board.drop_on(Column::Done), None);
    }
}
