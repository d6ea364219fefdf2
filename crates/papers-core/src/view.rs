//! Presentation layout selection.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{ConfigError, Result};

/// How the listing is laid out. Independent of filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    Card,
    Compact,
    /// Legacy layout, still accepted but not offered as a choice.
    List,
}

impl ViewMode {
    /// Modes offered to users, in shortcut order.
    pub const SELECTABLE: [ViewMode; 3] = [ViewMode::Grid, ViewMode::Card, ViewMode::Compact];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::Card => "card",
            ViewMode::Compact => "compact",
            ViewMode::List => "list",
        }
    }

    /// Keyboard shortcuts `1`, `2`, `3`.
    pub fn from_shortcut(key: char) -> Option<ViewMode> {
        match key {
            '1' => Some(ViewMode::Grid),
            '2' => Some(ViewMode::Card),
            '3' => Some(ViewMode::Compact),
            _ => None,
        }
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self, ViewMode::List)
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "grid" => Ok(ViewMode::Grid),
            "card" => Ok(ViewMode::Card),
            "compact" => Ok(ViewMode::Compact),
            "list" => Ok(ViewMode::List),
            _ => Err(ConfigError::InvalidViewMode {
                value: s.to_string(),
            }),
        }
    }
}

/// Holds the single active [`ViewMode`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewModeController {
    mode: ViewMode,
}

impl ViewModeController {
    pub fn new(mode: ViewMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Switch to a mode by name. On error the current mode is kept.
    pub fn set_mode(&mut self, value: &str) -> Result<ViewMode> {
        let mode = value.parse::<ViewMode>()?;
        self.set(mode);
        Ok(mode)
    }

    pub fn set(&mut self, mode: ViewMode) {
        if mode != self.mode {
            debug!(from = %self.mode, to = %mode, "view mode changed");
        }
        self.mode = mode;
    }

    /// Apply a keyboard shortcut; unknown keys are ignored.
    pub fn handle_shortcut(&mut self, key: char) -> Option<ViewMode> {
        let mode = ViewMode::from_shortcut(key)?;
        self.set(mode);
        Some(mode)
    }
}
