use crate::ruler::interaction::{KeySteps, DEFAULT_COARSE_STEP, DEFAULT_FINE_STEP, MAX_STEP};
use serde::Deserialize;

pub const SETTINGS_FILE: &str = "ruler_settings.json";
pub const SETTINGS_ENV: &str = "SCREEN_RULER_SETTINGS";

/// Launch configuration. Read once at start-up and never written back;
/// nothing the user changes at runtime survives a restart.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RulerSettings {
    /// When enabled the application initialises the logger at debug level.
    #[serde(default)]
    pub debug_logging: bool,
    /// Optional file receiving log output in addition to stderr.
    #[serde(default)]
    pub log_file: Option<String>,
    /// PNG or ICO used as the window icon. Missing or unreadable files fall
    /// back to the platform default.
    #[serde(default)]
    pub icon_path: Option<String>,
    /// Pixels moved per arrow key press. Values outside `1..=500` fall back
    /// to the default.
    #[serde(default = "default_coarse_step")]
    pub coarse_step: i32,
    /// Pixels moved or resized per arrow key press while Ctrl is held.
    #[serde(default = "default_fine_step")]
    pub fine_step: i32,
}

fn default_coarse_step() -> i32 {
    DEFAULT_COARSE_STEP
}

fn default_fine_step() -> i32 {
    DEFAULT_FINE_STEP
}

impl Default for RulerSettings {
    fn default() -> Self {
        Self {
            debug_logging: false,
            log_file: None,
            icon_path: None,
            coarse_step: default_coarse_step(),
            fine_step: default_fine_step(),
        }
    }
}

impl RulerSettings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut settings: Self = serde_json::from_str(&content)?;
        settings.validate_steps();
        Ok(settings)
    }

    fn validate_steps(&mut self) {
        let steps = self.key_steps();
        if steps.coarse != self.coarse_step || steps.fine != self.fine_step {
            tracing::warn!(
                coarse_step = self.coarse_step,
                fine_step = self.fine_step,
                max = MAX_STEP,
                "key steps out of range, using defaults"
            );
            self.coarse_step = steps.coarse;
            self.fine_step = steps.fine;
        }
    }

    /// Settings path from the environment, falling back to the working
    /// directory.
    pub fn default_path() -> String {
        std::env::var(SETTINGS_ENV).unwrap_or_else(|_| SETTINGS_FILE.to_string())
    }

    pub fn key_steps(&self) -> KeySteps {
        KeySteps {
            coarse: self.coarse_step,
            fine: self.fine_step,
        }
        .sanitized()
    }
}
