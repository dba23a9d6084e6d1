pub mod board_manager;
pub mod drag;
pub mod id_source;

pub use board_manager::{BoardManager, EditTarget};
pub use drag::{DragState, MoveRequest};
pub use id_source::{IdSource, SequentialIds, UuidIds};
