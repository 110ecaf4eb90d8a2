use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// SimConfig
// ---------------------------------------------------------------------------

/// Runtime tuning for a simulation run, loaded from YAML.
///
/// ```yaml
/// channel_capacity: 64
/// deadline_ms: 5000
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Bound of the step-request channel shared by all mower workers.
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
    /// Abort the run if it has not finished after this many milliseconds.
    /// No deadline when unset.
    #[serde(default)]
    pub deadline_ms: Option<u64>,
}

fn default_channel_capacity() -> usize {
    64
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            channel_capacity: default_channel_capacity(),
            deadline_ms: None,
        }
    }
}

impl SimConfig {
    /// Load from `path`, falling back to defaults when the file is absent.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&data)?)
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.deadline_ms.map(Duration::from_millis)
    }

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();
        if self.channel_capacity == 0 {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "channel_capacity must be at least 1".to_string(),
            });
        }
        if self.deadline_ms == Some(0) {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "deadline_ms is 0: every run with mowers will time out".to_string(),
            });
        }
        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
