//! Runtime policy for the editor shell.
//!
//! There is no configuration file. The binary builds an [`EditorConfig`]
//! from its command-line flags and everything else uses the defaults below.
//! Unset knobs keep defaults so callers can override a single field with
//! struct update syntax.

use tracing::info;

pub const PRODUCT_NAME: &str = "Tilde";
pub const PRODUCT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    /// Draw the centered welcome banner one third of the way down.
    pub banner: bool,
    /// Clear the whole screen before every frame instead of erasing per line.
    pub full_clear: bool,
    /// Place the terminal cursor at the tracked position. When off the
    /// cursor is parked at the top-left cell after each frame.
    pub cursor_tracking: bool,
    /// Consecutive input read failures tolerated before the loop gives up.
    /// Zero never gives up.
    pub max_read_errors: u32,
    pub product_name: String,
    pub version: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            banner: Self::default_banner(),
            full_clear: Self::default_full_clear(),
            cursor_tracking: Self::default_cursor_tracking(),
            max_read_errors: Self::default_max_read_errors(),
            product_name: PRODUCT_NAME.to_string(),
            version: PRODUCT_VERSION.to_string(),
        }
    }
}

impl EditorConfig {
    const fn default_banner() -> bool {
        true
    }
    const fn default_full_clear() -> bool {
        false
    }
    const fn default_cursor_tracking() -> bool {
        true
    }
    const fn default_max_read_errors() -> u32 {
        3
    }

    /// Whether `consecutive` read failures exhaust the retry budget.
    pub fn read_errors_exhausted(&self, consecutive: u32) -> bool {
        self.max_read_errors != 0 && consecutive >= self.max_read_errors
    }

    /// Record the effective policy once at startup.
    pub fn log_effective(&self) {
        info!(
            target: "config",
            banner = self.banner,
            full_clear = self.full_clear,
            cursor_tracking = self.cursor_tracking,
            max_read_errors = self.max_read_errors,
            version = self.version.as_str(),
            "effective_config"
        );
    }
}
