use crate::core::models::Column;

/// The single drag gesture a board tracks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { task_id: String, source: Column },
}

/// Move requested by a drop onto a column other than the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRequest {
    pub task_id: String,
    pub source: Column,
    pub target: Column,
}

impl DragState {
    /// Starts a drag, abandoning any drag already in flight.
    pub fn begin(&mut self, task_id: impl Into<String>, source: Column) {
        *self = DragState::Dragging {
            task_id: task_id.into(),
            source,
        };
    }

    /// Resolves a drop on `target`. The drag stays active until `end`,
    /// which the host fires after every drag whether or not it dropped.
    pub fn drop_on(&self, target: Column) -> Option<MoveRequest> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { source, .. } if *source == target => None,
            DragState::Dragging { task_id, source } => Some(MoveRequest {
                task_id: task_id.clone(),
                source: *source,
                target,
            }),
        }
    }

    pub fn end(&mut self) {
        *self = DragState::Idle;
    }

    pub fn is_dragging(&self, task_id: &str) -> bool {
        matches!(self, DragState::Dragging { task_id: id, .. } if id == task_id)
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, DragState::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_without_drag_requests_nothing() {
        assert_eq!(DragState::Idle.drop_on(Column::Done), None);
    }

    #[test]
    fn drop_on_other_column_requests_move() {
        let mut drag = DragState::default();
        drag.begin("1", Column::ToDo);
        assert_eq!(
            drag.drop_on(Column::Done),
            Some(MoveRequest {
                task_id: "1".into(),
                source: Column::ToDo,
                target: Column::Done,
            })
        );
    }

    #[test]
    fn drop_on_source_column_requests_nothing() {
        let mut drag = DragState::default();
        drag.begin("1", Column::InProgress);
        assert_eq!(drag.drop_on(Column::InProgress), None);
    }

    #[test]
    fn new_drag_replaces_old_one() {
        let mut drag = DragState::default();
        drag.begin("1", Column::ToDo);
        drag.begin("2", Column::Done);
        assert!(!drag.is_dragging("1"));
        assert!(drag.is_dragging("2"));
    }

    #[test]
    fn end_always_returns_to_idle() {
        let mut drag = DragState::default();
        drag.end();
        assert!(drag.is_idle());
        drag.begin("1", Column::ToDo);
        drag.end();
        assert!(drag.is_idle());
    }
}
