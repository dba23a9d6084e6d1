pub mod board;
pub mod column;
pub mod task;

pub use board::Board;
pub use column::Column;
pub use task::Task;
