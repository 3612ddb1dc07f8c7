use std::time::Duration;

use vidgen_core::stages::DEFAULT_STAGE_DELAY;

/// Progress simulator configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    /// Delay between two stage advances (default: 1500 ms).
    pub stage_delay: Duration,
}

impl SimulatorConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var          | Default |
    /// |------------------|---------|
    /// | `STAGE_DELAY_MS` | `1500`  |
    ///
    /// An unparseable value falls back to the default with a warning.
    pub fn from_env() -> Self {
        let stage_delay = match std::env::var("STAGE_DELAY_MS") {
            Ok(raw) => match raw.trim().parse::<u64>() {
                Ok(ms) => Duration::from_millis(ms),
                Err(_) => {
                    tracing::warn!(value = %raw, "STAGE_DELAY_MS is not a valid u64, using default");
                    DEFAULT_STAGE_DELAY
                }
            },
            Err(_) => DEFAULT_STAGE_DELAY,
        };

        Self { stage_delay }
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            stage_delay: DEFAULT_STAGE_DELAY,
        }
    }
}
