//! Render mode detection
//!
//! Picks the best glyph set the current terminal can display.

use std::env;

/// Available rendering modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Classic ASCII characters, works everywhere
    #[default]
    Ascii,

    /// Unicode symbols (✿ ◉ ♪ etc.), wide terminal support
    Unicode,
}

impl RenderMode {
    /// Get a human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            RenderMode::Ascii => "ASCII",
            RenderMode::Unicode => "Unicode",
        }
    }
}

/// Detect the best rendering mode for the current terminal
pub fn detect_render_mode() -> RenderMode {
    if is_unicode_supported() {
        log::info!("Using Unicode rendering mode");
        return RenderMode::Unicode;
    }

    log::info!("Falling back to ASCII rendering mode");
    RenderMode::Ascii
}

/// Check if the terminal advertises UTF-8 output
fn is_unicode_supported() -> bool {
    for var in ["LC_ALL", "LC_CTYPE", "LANG"] {
        if let Ok(value) = env::var(var) {
            let lower = value.to_lowercase();
            if lower.contains("utf-8") || lower.contains("utf8") {
                return true;
            }
            if !value.is_empty() {
                // First set locale variable wins
                return false;
            }
        }
    }
    false
}
