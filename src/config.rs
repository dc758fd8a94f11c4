//! Animation configuration: TOML file plus command-line overrides.

use crate::render::RenderMode;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use hanoi_core::{Colour, MAX_CYLINDERS, Peg, Tower};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Cylinder count used when neither a count nor colours are configured.
pub const DEFAULT_CYLINDERS: usize = 4;

/// Configuration for one animated run.
///
/// Every field can come from a TOML file; the CLI overrides them through
/// the `with_*` setters. When `colours` is set it fixes the cylinder count
/// and `cylinders` is ignored. [`AnimationConfig::with_cylinders`] drops any
/// colours loaded earlier, so the value applied last decides the count.
#[derive(Debug, Clone, PartialEq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_", strip_option)]
pub struct AnimationConfig {
    /// Number of cylinders. Ignored when `colours` is set.
    #[serde(default)]
    #[setters(skip)]
    cylinders: Option<usize>,

    /// Cylinder colours, largest first.
    #[serde(default)]
    colours: Option<Vec<Colour>>,

    /// Peg every cylinder starts on.
    #[serde(default = "default_source")]
    source: Peg,

    /// Peg the tower moves to.
    #[serde(default = "default_target")]
    target: Peg,

    /// Pause after each frame, in milliseconds.
    #[serde(default = "default_delay_ms")]
    delay_ms: u64,

    /// How frames reach the terminal.
    #[serde(default)]
    mode: RenderMode,
}

#[instrument]
fn default_source() -> Peg {
    Peg::A
}

#[instrument]
fn default_target() -> Peg {
    Peg::C
}

#[instrument]
fn default_delay_ms() -> u64 {
    300
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            cylinders: None,
            colours: None,
            source: default_source(),
            target: default_target(),
            delay_ms: default_delay_ms(),
            mode: RenderMode::default(),
        }
    }
}

impl AnimationConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(cylinders = config.cylinder_count(), "Config loaded successfully");
        Ok(config)
    }

    /// Sets the cylinder count, discarding any colour list so the count
    /// takes effect. The default palette colours the new cylinders.
    pub fn with_cylinders(mut self, count: usize) -> Self {
        if let Some(colours) = self.colours.take() {
            debug!(count, dropped = colours.len(), "Cylinder count replaces colours");
        }
        self.cylinders = Some(count);
        self
    }

    /// Number of cylinders the run will use.
    pub fn cylinder_count(&self) -> usize {
        match (&self.colours, self.cylinders) {
            (Some(colours), _) => colours.len(),
            (None, Some(count)) => count,
            (None, None) => DEFAULT_CYLINDERS,
        }
    }

    /// Pause after each frame.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Checks that the configuration describes a solvable run.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let count = self.cylinder_count();
        if count > MAX_CYLINDERS {
            return Err(ConfigError::new(format!(
                "{} cylinders exceeds the maximum of {}",
                count, MAX_CYLINDERS
            )));
        }

        if count > 0 && self.source == self.target {
            return Err(ConfigError::new(format!(
                "Source and target are both peg {}",
                self.source
            )));
        }

        Ok(())
    }

    /// Builds the starting tower: every cylinder on the source peg.
    #[instrument(skip(self))]
    pub fn tower(&self) -> Tower {
        match &self.colours {
            Some(colours) => Tower::with_colours(colours, self.source),
            None => Tower::new(self.cylinder_count(), self.source),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
