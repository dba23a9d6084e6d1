use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{Column, Task};

/// Column-ordered task lists. This is also the read-only snapshot handed to rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Board {
    #[serde(default)]
    pub todo: Vec<Task>,
    #[serde(default)]
    pub in_progress: Vec<Task>,
    #[serde(default)]
    pub done: Vec<Task>,
}

impl Board {
    /// The board a fresh page session starts with.
    pub fn sample() -> Self {
        Self {
            todo: vec![
                Task::new("1", "Plan project structure", "Define components and data flow"),
                Task::new("2", "Set up development environment", "Install dependencies and configure tools"),
            ],
            in_progress: vec![Task::new("3", "Implement drag and drop", "Add drag and drop functionality for tasks")],
            done: vec![Task::new("4", "Create initial layout", "Design the basic Kanban board structure")],
        }
    }

    pub fn column(&self, column: Column) -> &[Task] {
        match column {
            Column::ToDo => &self.todo,
            Column::InProgress => &self.in_progress,
            Column::Done => &self.done,
        }
    }

    pub(crate) fn column_mut(&mut self, column: Column) -> &mut Vec<Task> {
        match column {
            Column::ToDo => &mut self.todo,
            Column::InProgress => &mut self.in_progress,
            Column::Done => &mut self.done,
        }
    }

    pub fn len(&self, column: Column) -> usize {
        self.column(column).len()
    }

    pub fn total(&self) -> usize {
        Column::all().iter().map(|c| self.len(*c)).sum()
    }

    pub fn find(&self, task_id: &str, column: Column) -> Option<&Task> {
        self.column(column).iter().find(|t| t.id == task_id)
    }

    /// Column currently holding `task_id`, if any.
    pub fn locate(&self, task_id: &str) -> Option<Column> {
        Column::all()
            .into_iter()
            .find(|c| self.find(task_id, *c).is_some())
    }

    pub fn contains(&self, task_id: &str) -> bool {
        self.locate(task_id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Column, &Task)> {
        Column::all()
            .into_iter()
            .flat_map(move |c| self.column(c).iter().map(move |t| (c, t)))
    }

    /// First id that appears more than once across all columns.
    pub fn duplicate_id(&self) -> Option<&str> {
        let mut seen = HashSet::new();
        self.iter()
            .map(|(_, t)| t.id.as_str())
            .find(|id| !seen.insert(*id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_board_has_four_unique_tasks() {
        let board = Board::sample();
        assert_eq!(board.total(), 4);
        assert_eq!(board.len(Column::ToDo), 2);
        assert_eq!(board.duplicate_id(), None);
        assert_eq!(board.locate("3"), Some(Column::InProgress));
    }

    #[test]
    fn detects_ids_shared_between_columns() {
        let board = Board {
            todo: vec![Task::new("a", "one", "")],
            done: vec![Task::new("b", "two", ""), Task::new("a", "three", "")],
            ..Board::default()
        };
        assert_eq!(board.duplicate_id(), Some("a"));
    }

    #[test]
    fn serializes_with_column_keys() {
        let board = Board {
            in_progress: vec![Task::new("7", "Write docs", "")],
            ..Board::default()
        };
        let value = serde_json::to_value(&board).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "todo": [],
                "inProgress": [{ "id": "7", "title": "Write docs", "description": "" }],
                "done": []
            })
        );
    }

    #[test]
    fn missing_columns_and_descriptions_default_to_empty() {
        let board: Board = serde_json::from_str(r#"{ "done": [{ "id": "x", "title": "Ship" }] }"#).unwrap();
        assert!(board.todo.is_empty());
        assert_eq!(board.find("x", Column::Done).map(|t| t.description.as_str()), Some(""));
    }
}
