//! Presentation-level configuration
//!
//! Configuration for terminal output.

use serde::{Deserialize, Serialize};

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Enable colored terminal output
    pub color: bool,
    /// Show spinners while waiting on the model
    pub show_progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            show_progress: true,
        }
    }
}

impl OutputConfig {
    /// Apply the `--no-color` / `--quiet` flags on top of file settings
    pub fn with_flags(mut self, no_color: bool, quiet: bool) -> Self {
        if no_color {
            self.color = false;
        }
        if quiet {
            self.show_progress = false;
        }
        self
    }

    /// Set the process-wide color switch used by `colored`
    pub fn apply_color(&self) {
        colored::control::set_override(self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_only_disable() {
        let config = OutputConfig::default().with_flags(true, false);
        assert!(!config.color);
        assert!(config.show_progress);

        let config = OutputConfig {
            color: false,
            show_progress: false,
        }
        .with_flags(false, false);
        assert!(!config.color);
        assert!(!config.show_progress);
    }
}
