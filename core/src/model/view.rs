use std::fmt;

use anyhow::Result;

use crate::input::expand_key;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Dashboard,
    History,
}

impl ViewMode {
    pub const NAMES: [&'static str; 2] = ["dashboard", "history"];

    pub fn toggle(self) -> Self {
        match self {
            ViewMode::Dashboard => ViewMode::History,
            ViewMode::History => ViewMode::Dashboard,
        }
    }

    /// Accepts any unambiguous prefix, e.g. `dash` or `h`.
    pub fn parse(input: &str) -> Result<Self> {
        let name = expand_key(&input.to_lowercase(), &Self::NAMES)?;
        Ok(match name.as_str() {
            "history" => ViewMode::History,
            _ => ViewMode::Dashboard,
        })
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Dashboard => f.write_str("dashboard"),
            ViewMode::History => f.write_str("history"),
        }
    }
}
