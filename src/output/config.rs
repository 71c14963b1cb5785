//! Output configuration types

use termcolor::ColorChoice;

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Append a `N directories, M files` footer after the tree
    pub show_summary: bool,
}

impl OutputConfig {
    /// Color choice for a terminal stream built from this config.
    pub fn color_choice(&self) -> ColorChoice {
        if self.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            show_summary: false,
        }
    }
}
