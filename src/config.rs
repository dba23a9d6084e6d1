use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;

use crate::core::models::Board;

pub const CONFIG_ELEMENT_ID: &str = "board-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed board config: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("seed task id {0} is used more than once")]
    DuplicateTaskId(String),
    #[error("seed task {0} has an empty title")]
    EmptyTitle(String),
}

/// Page-level settings, read from the `board-config` JSON script in `index.html`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardConfig {
    pub log_level: LevelFilter,
    /// How long a count badge keeps its `updated` highlight.
    pub highlight_ms: u32,
    pub confirm_delete: bool,
    pub seed: Board,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Info,
            highlight_ms: 300,
            confirm_delete: true,
            seed: Board::sample(),
        }
    }
}

impl BoardConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: BoardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(id) = self.seed.duplicate_id() {
            return Err(ConfigError::DuplicateTaskId(id.to_string()));
        }
        if let Some((_, task)) = self.seed.iter().find(|(_, t)| t.title.trim().is_empty()) {
            return Err(ConfigError::EmptyTitle(task.id.clone()));
        }
        Ok(())
    }

    /// Reads the config embedded in the page, falling back to defaults.
    pub fn load_from_page() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        Self::from_page_text(text)
    }

    /// Config from the text of the `board-config` element. A missing, blank
    /// or invalid config yields the defaults.
    pub fn from_page_text(text: Option<String>) -> Self {
        match text {
            Some(json) if !json.trim().is_empty() => Self::from_json(&json).unwrap_or_else(|e| {
                log::error!("Ignoring page config: {}", e);
                Self::default()
            }),
            _ => Self::default(),
        }
    }
}
