//! Text styles for rendered labels
//!
//! Styles are applied with `colored`. A theme built with
//! [`Paint::Plain`] everywhere never emits escape codes.

use colored::Colorize;

/// Styling applied to a fragment of rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Paint {
    #[default]
    Plain,
    Bold,
    BoldGray,
    Dim,
    Yellow,
    BrightGreen,
}

impl Paint {
    pub fn apply(self, text: &str) -> String {
        match self {
            Paint::Plain => text.to_string(),
            Paint::Bold => text.bold().to_string(),
            Paint::BoldGray => text.bold().bright_black().to_string(),
            Paint::Dim => text.dimmed().to_string(),
            Paint::Yellow => text.yellow().to_string(),
            Paint::BrightGreen => text.bright_green().to_string(),
        }
    }
}
