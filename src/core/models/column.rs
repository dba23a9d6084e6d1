use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::ParseColumnError;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Column {
    #[default]
    #[serde(rename = "todo")]
    ToDo,
    #[serde(rename = "inProgress")]
    InProgress,
    #[serde(rename = "done")]
    Done,
}

impl Column {
    /// Identifier used in DOM ids, `data-column` attributes and the column select.
    pub fn key(&self) -> &'static str {
        match self {
            Column::ToDo => "todo",
            Column::InProgress => "inProgress",
            Column::Done => "done",
        }
    }

    /// Heading shown above the column.
    pub fn label(&self) -> &'static str {
        match self {
            Column::ToDo => "To Do",
            Column::InProgress => "In Progress",
            Column::Done => "Done",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Column::ToDo => 0,
            Column::InProgress => 1,
            Column::Done => 2,
        }
    }

    pub fn all() -> [Column; 3] {
        [Column::ToDo, Column::InProgress, Column::Done]
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Column {
    type Err = ParseColumnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Column::all()
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| ParseColumnError(s.to_string()))
    }
}
