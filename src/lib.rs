pub mod app;
pub mod config;
pub mod core;
pub mod features;
pub mod logging;
pub mod pages;

pub use app::App;
pub use config::BoardConfig;
pub use crate::core::models::{Board, Column, Task};
pub use crate::core::services::BoardManager;
pub use crate::core::ValidationError;
