use crate::error::AnalysisError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_ANALYSIS_DELAY_MS: u64 = 3000;
pub const SETTINGS_FILE_NAME: &str = "canopy-lens.toml";
const ENV_PREFIX: &str = "CANOPY_LENS";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    /// Simulated analysis time between an accepted upload and its result.
    pub analysis_delay_ms: u64,
    /// Fixes the mock predictor's random stream when set.
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            analysis_delay_ms: DEFAULT_ANALYSIS_DELAY_MS,
            rng_seed: None,
        }
    }
}

impl Settings {
    /// Layers built-in defaults, the optional TOML file at `path`, then
    /// `CANOPY_LENS_*` environment variables. A missing file is skipped.
    pub fn load(path: Option<&Path>) -> Result<Self, AnalysisError> {
        let mut builder = config::Config::builder()
            .set_default("analysis_delay_ms", DEFAULT_ANALYSIS_DELAY_MS as i64)?;

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(false));
        }

        let settings: Settings = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;

        tracing::debug!(
            delay_ms = settings.analysis_delay_ms,
            seeded = settings.rng_seed.is_some(),
            "Resolved analysis settings"
        );
        Ok(settings)
    }

    pub fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.analysis_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::{Mutex, MutexGuard, PoisonError};

    // Settings::load reads the process environment; tests that load must not
    // overlap with the one that sets CANOPY_LENS_* variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_lock() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn temp_settings_file(contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("canopy-lens-{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn defaults_match_reference_delay() {
        let settings = Settings::default();
        assert_eq!(settings.analysis_delay(), Duration::from_millis(3000));
        assert_eq!(settings.rng_seed, None);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let _env = env_lock();
        let path = std::env::temp_dir().join("canopy-lens-does-not-exist.toml");
        let settings = Settings::load(Some(&path)).unwrap();
        assert_eq!(settings.analysis_delay_ms, DEFAULT_ANALYSIS_DELAY_MS);
    }

    #[test]
    fn file_overrides_defaults() {
        let _env = env_lock();
        let path = temp_settings_file("analysis_delay_ms = 250\nrng_seed = 42\n");
        let settings = Settings::load(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.analysis_delay_ms, 250);
        assert_eq!(settings.rng_seed, Some(42));
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let _env = env_lock();
        let path = temp_settings_file("analysis_delay_ms = [\n");
        let result = Settings::load(Some(&path));
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(AnalysisError::Config(_))));
    }

    #[test]
    fn environment_overrides_file() {
        let _env = env_lock();
        let path = temp_settings_file("analysis_delay_ms = 250\nrng_seed = 42\n");

        std::env::set_var("CANOPY_LENS_ANALYSIS_DELAY_MS", "500");
        std::env::set_var("CANOPY_LENS_RNG_SEED", "9");
        let result = Settings::load(Some(&path));
        std::env::remove_var("CANOPY_LENS_ANALYSIS_DELAY_MS");
        std::env::remove_var("CANOPY_LENS_RNG_SEED");
        std::fs::remove_file(&path).ok();

        let settings = result.unwrap();
        assert_eq!(settings.analysis_delay_ms, 500);
        assert_eq!(settings.rng_seed, Some(9));
    }
}
