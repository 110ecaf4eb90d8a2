pub mod check;
pub mod run;

use anyhow::Context;
use mowsim_core::config::{SimConfig, WarnLevel};
use std::path::Path;

const DEFAULT_CONFIG_FILE: &str = "mowsim.yaml";

/// Load the simulation config and apply command-line overrides.
///
/// An explicit `--config` path must exist; the implicit `./mowsim.yaml` is
/// optional.
pub fn load_config(explicit: Option<&Path>, deadline_ms: Option<u64>) -> anyhow::Result<SimConfig> {
    let mut config = match explicit {
        Some(path) => {
            anyhow::ensure!(path.exists(), "config file '{}' not found", path.display());
            SimConfig::load(path)
                .with_context(|| format!("failed to load config '{}'", path.display()))?
        }
        None => SimConfig::load(Path::new(DEFAULT_CONFIG_FILE))
            .with_context(|| format!("failed to load config '{DEFAULT_CONFIG_FILE}'"))?,
    };
    if deadline_ms.is_some() {
        config.deadline_ms = deadline_ms;
    }

    for warning in config.validate() {
        match warning.level {
            WarnLevel::Error => anyhow::bail!("invalid config: {}", warning.message),
            WarnLevel::Warning => tracing::warn!("{}", warning.message),
        }
    }
    Ok(config)
}
